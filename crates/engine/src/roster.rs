//! Participants of a split session.
//!
//! A roster always has [`MAX_PARTICIPANTS`] slots. The first `person_count`
//! slots are the active participants: their names come with the roster and are
//! locked. The remaining slots are placeholders that can be renamed but can
//! never bear a share.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{ResultEngine, SplitError};

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 8;

/// Name given to active slots when the roster is built from a count only.
pub const DEFAULT_ACTIVE_NAME: &str = "X";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub index: usize,
    pub display_name: String,
    pub is_name_locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Roster {
    person_count: usize,
    participants: Vec<Participant>,
}

impl Roster {
    /// Builds a roster with default names: `"X"` for active slots and
    /// `"Person{index}"` for placeholders.
    pub fn new(person_count: usize) -> ResultEngine<Self> {
        let names = (0..MAX_PARTICIPANTS)
            .map(|index| {
                if index < person_count {
                    DEFAULT_ACTIVE_NAME.to_string()
                } else {
                    format!("Person{index}")
                }
            })
            .collect();
        Self::with_names(person_count, names)
    }

    /// Builds a roster from exactly [`MAX_PARTICIPANTS`] names.
    pub fn with_names(person_count: usize, names: Vec<String>) -> ResultEngine<Self> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&person_count) {
            return Err(SplitError::InvalidRoster(format!(
                "person count must be between {MIN_PARTICIPANTS} and {MAX_PARTICIPANTS}, got {person_count}"
            )));
        }
        if names.len() != MAX_PARTICIPANTS {
            return Err(SplitError::InvalidRoster(format!(
                "expected {MAX_PARTICIPANTS} names, got {}",
                names.len()
            )));
        }

        let participants = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| -> ResultEngine<Participant> {
                Ok(Participant {
                    index,
                    display_name: normalize_name(&name)?,
                    is_name_locked: index < person_count,
                })
            })
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(Self {
            person_count,
            participants,
        })
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.person_count
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Active participants, the only ones that can bear a share.
    pub fn active(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().take(self.person_count)
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index < self.person_count
    }

    pub fn participant(&self, index: usize) -> ResultEngine<&Participant> {
        self.participants.get(index).ok_or_else(|| {
            SplitError::IndexOutOfRange(format!("participant {index} of {MAX_PARTICIPANTS}"))
        })
    }

    /// Fails with [`SplitError::IndexOutOfRange`] unless `index` is an active
    /// participant.
    pub fn ensure_active(&self, index: usize) -> ResultEngine<()> {
        if self.is_active(index) {
            Ok(())
        } else {
            Err(SplitError::IndexOutOfRange(format!(
                "participant {index} of {}",
                self.person_count
            )))
        }
    }

    /// Renames an unlocked slot. Returns the stored (normalized) name.
    pub fn rename(&mut self, index: usize, name: &str) -> ResultEngine<&str> {
        let normalized = normalize_name(name)?;
        let participant = self.participants.get_mut(index).ok_or_else(|| {
            SplitError::IndexOutOfRange(format!("participant {index} of {MAX_PARTICIPANTS}"))
        })?;
        if participant.is_name_locked {
            return Err(SplitError::NameLocked(index));
        }
        participant.display_name = normalized;
        Ok(&participant.display_name)
    }
}

/// Trims and NFC-normalizes a display name, rejecting blank names.
fn normalize_name(raw: &str) -> ResultEngine<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SplitError::InvalidName("name cannot be blank".to_string()));
    }
    Ok(trimmed.nfc().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_mark_active_slots_locked() {
        let roster = Roster::new(3).unwrap();
        assert_eq!(roster.participants().len(), MAX_PARTICIPANTS);
        assert_eq!(roster.active().count(), 3);
        assert_eq!(roster.participant(0).unwrap().display_name, "X");
        assert!(roster.participant(2).unwrap().is_name_locked);
        assert_eq!(roster.participant(3).unwrap().display_name, "Person3");
        assert!(!roster.participant(3).unwrap().is_name_locked);
    }

    #[test]
    fn person_count_out_of_range_is_rejected() {
        assert!(matches!(Roster::new(1), Err(SplitError::InvalidRoster(_))));
        assert!(matches!(Roster::new(9), Err(SplitError::InvalidRoster(_))));
        assert!(Roster::new(2).is_ok());
        assert!(Roster::new(8).is_ok());
    }

    #[test]
    fn with_names_requires_every_slot() {
        let names = vec!["a".to_string(); 5];
        assert!(matches!(
            Roster::with_names(2, names),
            Err(SplitError::InvalidRoster(_))
        ));
    }

    #[test]
    fn rename_only_unlocked_slots() {
        let mut roster = Roster::new(2).unwrap();
        assert_eq!(roster.rename(0, "Alice"), Err(SplitError::NameLocked(0)));
        assert_eq!(roster.rename(5, "  Bob  ").unwrap(), "Bob");
        assert_eq!(roster.participant(5).unwrap().display_name, "Bob");
    }

    #[test]
    fn rename_rejects_blank_and_unknown_slots() {
        let mut roster = Roster::new(2).unwrap();
        assert!(matches!(
            roster.rename(4, "   "),
            Err(SplitError::InvalidName(_))
        ));
        assert!(matches!(
            roster.rename(8, "Eve"),
            Err(SplitError::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn rename_normalizes_to_nfc() {
        let mut roster = Roster::new(2).unwrap();
        // "e" followed by a combining acute accent.
        let stored = roster.rename(6, "Jose\u{0301}").unwrap().to_string();
        assert_eq!(stored, "Jos\u{e9}");
    }
}
