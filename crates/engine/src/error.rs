//! The module contains the errors the split engine can return.
//!
//! The errors a presentation layer is expected to handle are:
//!
//! - [`EmptySelection`] returned when a split is confirmed with no bearer.
//! - [`AlreadyComplete`] returned when the session has already allocated its
//!   last item.
//! - [`IndexOutOfRange`] returned when a participant, receipt or item index is
//!   outside the bounds of the roster or the ledger.
//!
//! The remaining variants are raised while building a session or renaming a
//! participant.
//!
//!  [`EmptySelection`]: SplitError::EmptySelection
//!  [`AlreadyComplete`]: SplitError::AlreadyComplete
//!  [`IndexOutOfRange`]: SplitError::IndexOutOfRange
use thiserror::Error;

/// Split engine custom errors.
#[derive(Error, Debug, Clone)]
pub enum SplitError {
    #[error("Select at least one participant")]
    EmptySelection,
    #[error("Split already complete")]
    AlreadyComplete,
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),
    #[error("Invalid ledger: {0}")]
    InvalidLedger(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Participant {0} name is locked")]
    NameLocked(usize),
    #[error("Amount overflow: {0}")]
    Overflow(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl PartialEq for SplitError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptySelection, Self::EmptySelection) => true,
            (Self::AlreadyComplete, Self::AlreadyComplete) => true,
            (Self::IndexOutOfRange(a), Self::IndexOutOfRange(b)) => a == b,
            (Self::InvalidRoster(a), Self::InvalidRoster(b)) => a == b,
            (Self::InvalidLedger(a), Self::InvalidLedger(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::NameLocked(a), Self::NameLocked(b)) => a == b,
            (Self::Overflow(a), Self::Overflow(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            _ => false,
        }
    }
}
