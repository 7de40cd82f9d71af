use serde::{Deserialize, Serialize};

use crate::{AllocationTable, SplitCursor};

/// State saved right before a split is recorded.
///
/// `cursor` is the position of the item that split allocated, so restoring it
/// puts the session back on that same item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub allocation_table: AllocationTable,
    pub cursor: SplitCursor,
}

/// Undo stack of snapshots, last pushed is first popped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryStack(Vec<HistorySnapshot>);

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.0.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<HistorySnapshot> {
        self.0.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&HistorySnapshot> {
        self.0.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
