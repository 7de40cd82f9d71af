use serde::{Deserialize, Serialize};

use crate::{ReceiptLedger, ResultEngine, SplitError};

/// Position of the line item currently being split.
///
/// The derived ordering is lexicographic on `(receipt_index, item_index)`,
/// which is the order a session visits items in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SplitCursor {
    pub receipt_index: usize,
    pub item_index: usize,
}

impl SplitCursor {
    #[must_use]
    pub const fn new(receipt_index: usize, item_index: usize) -> Self {
        Self {
            receipt_index,
            item_index,
        }
    }

    /// `true` on the last item of the last receipt.
    #[must_use]
    pub fn is_at_last_item(&self, ledger: &ReceiptLedger) -> bool {
        let Some(last) = ledger.receipts().len().checked_sub(1) else {
            return false;
        };
        self.receipt_index == last
            && ledger.receipts()[last].items.len().checked_sub(1) == Some(self.item_index)
    }

    /// Moves to the next item, wrapping to the first item of the next receipt.
    ///
    /// The last item has no successor: advancing from it fails with
    /// [`SplitError::AlreadyComplete`] and leaves the cursor untouched.
    pub fn advance(&mut self, ledger: &ReceiptLedger) -> ResultEngine<()> {
        if self.is_at_last_item(ledger) {
            return Err(SplitError::AlreadyComplete);
        }
        let receipt = ledger.receipt(self.receipt_index)?;

        let next_item = self.item_index + 1;
        if next_item >= receipt.items.len() {
            ledger.receipt(self.receipt_index + 1)?;
            self.receipt_index += 1;
            self.item_index = 0;
        } else {
            self.item_index = next_item;
        }
        Ok(())
    }
}
