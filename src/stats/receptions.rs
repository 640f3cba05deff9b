use serde::Serialize;

use super::tally::{ByPlayer, Dim};
use crate::lineup::PlayerId;
use crate::notation::codes::{Code, ReceptionOutcome, ReceptionType};
use crate::rally::ReceptionEvent;

/// Reception type (1-2) → outcome (1-4).
pub type ReceptionTree = Dim<Dim<u64, 4, 1>, 2, 1>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Receptions(ByPlayer<ReceptionTree>);

impl Receptions {
    pub fn record(&mut self, event: &ReceptionEvent) {
        *self
            .0
            .entry(event.player)
            .get_mut(event.reception_type.code() as usize)
            .get_mut(event.outcome.code() as usize) += 1;
    }

    pub fn count(
        &self,
        player: PlayerId,
        reception_type: ReceptionType,
        outcome: ReceptionOutcome,
    ) -> u64 {
        self.0.get(player).map_or(0, |tree| {
            *tree
                .get(reception_type.code() as usize)
                .get(outcome.code() as usize)
        })
    }

    /// Receptions of a player by outcome code 1-4, over both types.
    pub fn outcomes(&self, player: PlayerId) -> [u64; 4] {
        let mut outcomes = [0; 4];
        if let Some(tree) = self.0.get(player) {
            for (_, by_outcome) in tree.iter() {
                for (outcome, count) in by_outcome.iter() {
                    outcomes[outcome - 1] += count;
                }
            }
        }
        outcomes
    }

    pub fn by_player(&self) -> &ByPlayer<ReceptionTree> {
        &self.0
    }

    pub fn merge(&mut self, other: &Self) {
        self.0.merge(&other.0);
    }
}
