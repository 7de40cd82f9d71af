//! Per-participant view of the allocations, for the results screen.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Money, ResultEngine, SplitEngine};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub place_name: String,
    pub product_name: String,
    pub share: Money,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParticipantSummary {
    pub index: usize,
    pub name: String,
    pub total: Money,
    pub lines: Vec<SummaryLine>,
}

impl SplitEngine {
    /// What each active participant owes, lines in receipt order.
    ///
    /// Participants who bore nothing are listed with a zero total.
    pub fn summary(&self) -> ResultEngine<Vec<ParticipantSummary>> {
        let table = self.allocation_snapshot();
        self.roster()
            .active()
            .map(|participant| -> ResultEngine<ParticipantSummary> {
                let mut seen = BTreeSet::new();
                let mut lines = Vec::new();
                for receipt in self.ledger().receipts() {
                    for item in &receipt.items {
                        let key = (receipt.place_name.as_str(), item.product_name.as_str());
                        if !seen.insert(key) {
                            continue;
                        }
                        if let Some(share) =
                            table.get(participant.index, &receipt.place_name, &item.product_name)
                        {
                            lines.push(SummaryLine {
                                place_name: receipt.place_name.clone(),
                                product_name: item.product_name.clone(),
                                share,
                            });
                        }
                    }
                }
                Ok(ParticipantSummary {
                    index: participant.index,
                    name: participant.display_name.clone(),
                    total: table.total_for(participant.index)?,
                    lines,
                })
            })
            .collect()
    }
}
