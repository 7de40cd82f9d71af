//! Split-allocation engine.
//!
//! A [`SplitEngine`] walks the line items of a [`ReceiptLedger`] one at a time.
//! For each item the caller marks a subset of the [`Roster`] as bearers and
//! confirms the split: every bearer is charged the same rounded share (see
//! [`Money::split_share`]) in the [`AllocationTable`] and the cursor moves on.
//! The last confirmation completes the session. Each confirmation can be undone
//! with [`SplitEngine::rollback`], including the one that completed it.
//!
//! ```rust
//! use split_engine::{EngineState, LineItem, Money, Receipt, Roster, SplitEngine};
//!
//! let mut engine = SplitEngine::builder()
//!     .roster(Roster::new(2).unwrap())
//!     .receipts(vec![Receipt::new(
//!         "Cafe",
//!         vec![LineItem::new("Coffee", Money::new(500), 2)],
//!     )])
//!     .build()
//!     .unwrap();
//!
//! engine.select_all().unwrap();
//! let state = engine.confirm_selection().unwrap();
//! assert_eq!(state, EngineState::Complete);
//! assert_eq!(
//!     engine.allocation_snapshot().get(1, "Cafe", "Coffee"),
//!     Some(Money::new(500))
//! );
//! ```

use serde::{Deserialize, Serialize};

pub use allocation::{AllocationTable, PlaceShares};
pub use cursor::SplitCursor;
pub use error::SplitError;
pub use history::{HistorySnapshot, HistoryStack};
pub use money::{Money, ROUNDING_UNIT};
pub use receipts::{LineItem, Receipt, ReceiptLedger};
pub use roster::{MAX_PARTICIPANTS, MIN_PARTICIPANTS, Participant, Roster};
pub use selection::SelectionSet;
pub use summary::{ParticipantSummary, SummaryLine};

mod allocation;
mod cursor;
mod error;
mod history;
mod money;
mod receipts;
mod roster;
mod selection;
mod summary;

type ResultEngine<T> = Result<T, SplitError>;

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Waiting for the bearers of the item under the cursor.
    Active(SplitCursor),
    /// Every item has been allocated.
    Complete,
}

/// Outcome of pressing a participant slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotAction {
    /// Selection mode: the slot was toggled.
    Toggled { index: usize, selected: bool },
    /// Edit mode on a renameable slot: the caller should ask for a new name.
    RenameRequested(usize),
    /// Edit mode on a locked slot.
    Ignored,
}

/// Item under the cursor, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CurrentItem {
    pub place_name: String,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u64,
    pub line_total: Money,
}

/// One split session over one set of receipts.
#[derive(Clone, Debug)]
pub struct SplitEngine {
    roster: Roster,
    ledger: ReceiptLedger,
    cursor: SplitCursor,
    complete: bool,
    selection: SelectionSet,
    allocations: AllocationTable,
    history: HistoryStack,
    edit_mode: bool,
}

impl SplitEngine {
    /// Return a builder for `SplitEngine`. Help to build the struct.
    pub fn builder() -> SplitEngineBuilder {
        SplitEngineBuilder::default()
    }

    /// Starts a session on the first item of the first receipt.
    pub fn new(roster: Roster, ledger: ReceiptLedger) -> ResultEngine<Self> {
        ledger.validate()?;
        tracing::debug!(
            participants = roster.person_count(),
            receipts = ledger.len(),
            items = ledger.item_count(),
            "split session started"
        );
        Ok(Self {
            roster,
            ledger,
            cursor: SplitCursor::default(),
            complete: false,
            selection: SelectionSet::new(),
            allocations: AllocationTable::new(),
            history: HistoryStack::new(),
            edit_mode: false,
        })
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.complete {
            EngineState::Complete
        } else {
            EngineState::Active(self.cursor)
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Position of the current item. Once complete, the last allocated item.
    #[must_use]
    pub fn cursor(&self) -> SplitCursor {
        self.cursor
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn ledger(&self) -> &ReceiptLedger {
        &self.ledger
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Read-only view of what everyone owes so far.
    #[must_use]
    pub fn allocation_snapshot(&self) -> &AllocationTable {
        &self.allocations
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_rollback(&self) -> bool {
        !self.history.is_empty()
    }

    /// `(allocated items, total items)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let before: usize = self
            .ledger
            .receipts()
            .iter()
            .take(self.cursor.receipt_index)
            .map(|r| r.items.len())
            .sum();
        let done = before + self.cursor.item_index + usize::from(self.complete);
        (done, self.ledger.item_count())
    }

    pub fn current_item(&self) -> ResultEngine<CurrentItem> {
        let (receipt, item) = self
            .ledger
            .item(self.cursor.receipt_index, self.cursor.item_index)?;
        Ok(CurrentItem {
            place_name: receipt.place_name.clone(),
            product_name: item.product_name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total: item.line_total()?,
        })
    }

    /// Flips a participant in or out of the bearers of the current item.
    pub fn toggle_selection(&mut self, index: usize) -> ResultEngine<bool> {
        if self.complete {
            tracing::warn!(index, "selection toggled after completion");
            return Err(SplitError::AlreadyComplete);
        }
        self.roster.ensure_active(index)?;
        Ok(self.selection.toggle(index))
    }

    /// Marks every active participant as a bearer of the current item.
    pub fn select_all(&mut self) -> ResultEngine<()> {
        if self.complete {
            tracing::warn!("select all after completion");
            return Err(SplitError::AlreadyComplete);
        }
        for participant in 0..self.roster.person_count() {
            self.selection.insert(participant);
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Confirms the split of the current item over the pending selection.
    pub fn confirm_selection(&mut self) -> ResultEngine<EngineState> {
        let selection = self.selection.clone();
        self.confirm_split(&selection)
    }

    /// Charges every participant in `selection` an equal rounded share of the
    /// current item and moves to the next item, or completes the session on
    /// the last one.
    ///
    /// Every check runs before the first write: on error nothing changes.
    pub fn confirm_split(&mut self, selection: &SelectionSet) -> ResultEngine<EngineState> {
        if self.complete {
            tracing::warn!("split confirmed after completion");
            return Err(SplitError::AlreadyComplete);
        }
        if selection.is_empty() {
            tracing::warn!(cursor = ?self.cursor, "split confirmed without bearers");
            return Err(SplitError::EmptySelection);
        }
        for participant in selection.iter() {
            self.roster.ensure_active(participant)?;
        }

        let (receipt, item) = self
            .ledger
            .item(self.cursor.receipt_index, self.cursor.item_index)?;
        let price = item.line_total()?;
        let share = price.split_share(selection.len())?;

        let was_last = self.cursor.is_at_last_item(&self.ledger);
        let next = if was_last {
            None
        } else {
            let mut next = self.cursor;
            next.advance(&self.ledger)?;
            Some(next)
        };

        self.history.push(HistorySnapshot {
            allocation_table: self.allocations.clone(),
            cursor: self.cursor,
        });
        for participant in selection.iter() {
            self.allocations
                .record(participant, &receipt.place_name, &item.product_name, share);
        }
        tracing::debug!(
            receipt = self.cursor.receipt_index,
            item = self.cursor.item_index,
            product = %item.product_name,
            price = %price,
            bearers = selection.len(),
            share = %share,
            "split recorded"
        );
        self.selection.clear();

        match next {
            Some(next) => self.cursor = next,
            None => {
                self.complete = true;
                tracing::info!(items = self.ledger.item_count(), "split session complete");
            }
        }
        Ok(self.state())
    }

    /// Undoes the most recent confirmed split. Without history this does
    /// nothing.
    pub fn rollback(&mut self) -> EngineState {
        let Some(snapshot) = self.history.pop() else {
            tracing::debug!("nothing to roll back");
            return self.state();
        };

        self.allocations = snapshot.allocation_table;
        self.cursor = snapshot.cursor;
        self.complete = false;
        self.selection.clear();
        tracing::debug!(
            receipt = self.cursor.receipt_index,
            item = self.cursor.item_index,
            "split rolled back"
        );
        self.state()
    }

    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Switches between selecting bearers and renaming slots.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        self.edit_mode
    }

    /// Dispatches a press on a participant slot according to the edit mode.
    pub fn press_slot(&mut self, index: usize) -> ResultEngine<SlotAction> {
        let participant = self.roster.participant(index)?;
        if self.edit_mode {
            return Ok(if participant.is_name_locked {
                SlotAction::Ignored
            } else {
                SlotAction::RenameRequested(index)
            });
        }
        let selected = self.toggle_selection(index)?;
        Ok(SlotAction::Toggled { index, selected })
    }

    pub fn rename_participant(&mut self, index: usize, name: &str) -> ResultEngine<()> {
        let stored = self.roster.rename(index, name)?;
        tracing::debug!(index, name = %stored, "participant renamed");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SplitEngineBuilder {
    roster: Option<Roster>,
    receipts: Vec<Receipt>,
}

impl SplitEngineBuilder {
    /// Pass the required roster
    pub fn roster(mut self, roster: Roster) -> SplitEngineBuilder {
        self.roster = Some(roster);
        self
    }

    /// Pass the receipts to split, in order
    pub fn receipts(mut self, receipts: Vec<Receipt>) -> SplitEngineBuilder {
        self.receipts = receipts;
        self
    }

    /// Append one receipt
    pub fn receipt(mut self, receipt: Receipt) -> SplitEngineBuilder {
        self.receipts.push(receipt);
        self
    }

    /// Construct `SplitEngine`
    pub fn build(self) -> ResultEngine<SplitEngine> {
        let roster = self
            .roster
            .ok_or_else(|| SplitError::InvalidRoster("missing roster".to_string()))?;
        SplitEngine::new(roster, ReceiptLedger::new(self.receipts)?)
    }
}
