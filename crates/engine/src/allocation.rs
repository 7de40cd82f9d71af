//! Running record of what each participant owes.
//!
//! Amounts are keyed by participant index, then by receipt place name, then by
//! product name. A product is visited once per session, so recording the same
//! key twice replaces the previous share instead of adding to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Money, ResultEngine, SplitError};

/// Shares of one participant: place name -> product name -> share.
pub type PlaceShares = BTreeMap<String, BTreeMap<String, Money>>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationTable(BTreeMap<usize, PlaceShares>);

impl AllocationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the share of `participant` for `product_name` at `place_name`.
    pub fn record(&mut self, participant: usize, place_name: &str, product_name: &str, share: Money) {
        self.0
            .entry(participant)
            .or_default()
            .entry(place_name.to_string())
            .or_default()
            .insert(product_name.to_string(), share);
    }

    #[must_use]
    pub fn get(&self, participant: usize, place_name: &str, product_name: &str) -> Option<Money> {
        self.0
            .get(&participant)?
            .get(place_name)?
            .get(product_name)
            .copied()
    }

    #[must_use]
    pub fn shares_of(&self, participant: usize) -> Option<&PlaceShares> {
        self.0.get(&participant)
    }

    /// Participants with at least one recorded share.
    pub fn participants(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every share recorded for `participant`.
    pub fn total_for(&self, participant: usize) -> ResultEngine<Money> {
        let Some(places) = self.0.get(&participant) else {
            return Ok(Money::ZERO);
        };
        places
            .values()
            .flat_map(BTreeMap::values)
            .try_fold(Money::ZERO, |acc, share| {
                acc.checked_add(*share).ok_or_else(|| {
                    SplitError::Overflow(format!("total of participant {participant}"))
                })
            })
    }

    /// Sum of every share across all participants.
    pub fn collected_total(&self) -> ResultEngine<Money> {
        self.participants().try_fold(Money::ZERO, |acc, participant| {
            acc.checked_add(self.total_for(participant)?)
                .ok_or_else(|| SplitError::Overflow("collected total".to_string()))
        })
    }
}
