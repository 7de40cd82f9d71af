//! Receipts and their line items.
//!
//! The ledger is owned by whoever collected the receipts. A split session takes
//! a snapshot of it when it starts and only reads it afterwards.

use serde::{Deserialize, Serialize};

use crate::{Money, ResultEngine, SplitError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u64,
}

impl LineItem {
    pub fn new(product_name: impl Into<String>, unit_price: Money, quantity: u64) -> Self {
        Self {
            product_name: product_name.into(),
            unit_price,
            quantity,
        }
    }

    /// `unit_price * quantity`, the amount split across the bearers.
    pub fn line_total(&self) -> ResultEngine<Money> {
        self.unit_price.checked_mul(self.quantity).ok_or_else(|| {
            SplitError::Overflow(format!(
                "{} x {} for {}",
                self.unit_price, self.quantity, self.product_name
            ))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub place_name: String,
    pub items: Vec<LineItem>,
}

impl Receipt {
    pub fn new(place_name: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            place_name: place_name.into(),
            items,
        }
    }

    /// Sum of the line totals.
    pub fn total(&self) -> ResultEngine<Money> {
        self.items.iter().try_fold(Money::ZERO, |acc, item| {
            acc.checked_add(item.line_total()?)
                .ok_or_else(|| SplitError::Overflow(format!("total of {}", self.place_name)))
        })
    }
}

/// Ordered receipts of one split session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptLedger {
    receipts: Vec<Receipt>,
}

impl ReceiptLedger {
    /// Builds a ledger that a session can walk: at least one receipt and no
    /// receipt without items.
    pub fn new(receipts: Vec<Receipt>) -> ResultEngine<Self> {
        let ledger = Self { receipts };
        ledger.validate()?;
        Ok(ledger)
    }

    pub(crate) fn validate(&self) -> ResultEngine<()> {
        if self.receipts.is_empty() {
            return Err(SplitError::InvalidLedger("no receipts".to_string()));
        }
        if let Some(receipt) = self.receipts.iter().find(|r| r.items.is_empty()) {
            return Err(SplitError::InvalidLedger(format!(
                "receipt \"{}\" has no items",
                receipt.place_name
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    pub fn receipt(&self, index: usize) -> ResultEngine<&Receipt> {
        self.receipts.get(index).ok_or_else(|| {
            SplitError::IndexOutOfRange(format!("receipt {index} of {}", self.receipts.len()))
        })
    }

    pub fn item(&self, receipt_index: usize, item_index: usize) -> ResultEngine<(&Receipt, &LineItem)> {
        let receipt = self.receipt(receipt_index)?;
        let item = receipt.items.get(item_index).ok_or_else(|| {
            SplitError::IndexOutOfRange(format!(
                "item {item_index} of {} in receipt {receipt_index}",
                receipt.items.len()
            ))
        })?;
        Ok((receipt, item))
    }

    /// Number of items across every receipt.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.receipts.iter().map(|r| r.items.len()).sum()
    }

    pub fn total(&self) -> ResultEngine<Money> {
        self.receipts.iter().try_fold(Money::ZERO, |acc, receipt| {
            acc.checked_add(receipt.total()?)
                .ok_or_else(|| SplitError::Overflow("ledger total".to_string()))
        })
    }
}
