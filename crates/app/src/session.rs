use std::{fs, path::Path};

use serde::Deserialize;
use split_engine::{MAX_PARTICIPANTS, Receipt, Roster, SplitEngine};

use crate::error::Result;

/// Session file: who is splitting and what.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFile {
    pub person_count: usize,
    /// Slot names in order. Missing slots get the default names.
    #[serde(default)]
    pub names: Vec<String>,
    pub receipts: Vec<Receipt>,
}

impl SessionFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    fn roster(&self) -> Result<Roster> {
        if self.names.is_empty() {
            return Ok(Roster::new(self.person_count)?);
        }
        let defaults = Roster::new(self.person_count)?;
        let names = defaults
            .participants()
            .iter()
            .enumerate()
            .map(|(index, default)| {
                self.names
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| default.display_name.clone())
            })
            .chain(self.names.iter().skip(MAX_PARTICIPANTS).cloned())
            .collect();
        Ok(Roster::with_names(self.person_count, names)?)
    }

    pub fn into_engine(self) -> Result<SplitEngine> {
        let roster = self.roster()?;
        Ok(SplitEngine::builder()
            .roster(roster)
            .receipts(self.receipts)
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use split_engine::{Money, SplitError};

    use super::*;
    use crate::error::AppError;

    const CAFE: &str = r#"{
        "person_count": 2,
        "names": ["Ana", "Ben"],
        "receipts": [
            {"place_name": "Cafe", "items": [
                {"product_name": "Coffee", "unit_price": 500, "quantity": 2}
            ]}
        ]
    }"#;

    #[test]
    fn partial_names_are_padded_with_defaults() {
        let engine = SessionFile::parse(CAFE).unwrap().into_engine().unwrap();
        let names: Vec<_> = engine
            .roster()
            .participants()
            .iter()
            .map(|p| p.display_name.as_str())
            .collect();
        assert_eq!(names[..3], ["Ana", "Ben", "Person2"]);
        assert_eq!(
            engine.current_item().unwrap().line_total,
            Money::new(1000)
        );
    }

    #[test]
    fn too_many_names_are_rejected() {
        let mut session = SessionFile::parse(CAFE).unwrap();
        session.names = (0..9).map(|i| format!("n{i}")).collect();
        assert!(matches!(
            session.into_engine(),
            Err(AppError::Engine(SplitError::InvalidRoster(_)))
        ));
    }

    #[test]
    fn session_without_receipts_is_rejected() {
        let session =
            SessionFile::parse(r#"{"person_count": 3, "receipts": []}"#).unwrap();
        assert!(matches!(
            session.into_engine(),
            Err(AppError::Engine(SplitError::InvalidLedger(_)))
        ));
    }
}
