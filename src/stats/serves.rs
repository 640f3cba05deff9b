use serde::Serialize;

use super::tally::{ByPlayer, Dim};
use crate::lineup::PlayerId;
use crate::notation::codes::{Code, ServeOutcome, ServeType, ServeZone};
use crate::rally::ServeEvent;

/// Serve type (1-4) → zone (1-10) → outcome (1-4).
pub type ServeTree = Dim<Dim<Dim<u64, 4, 1>, { ServeZone::COUNT }, 1>, { ServeType::COUNT }, 1>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Serves(ByPlayer<ServeTree>);

impl Serves {
    pub fn record(&mut self, event: &ServeEvent) {
        *self
            .0
            .entry(event.server)
            .get_mut(event.serve_type.code() as usize)
            .get_mut(event.zone.code() as usize)
            .get_mut(event.outcome.code() as usize) += 1;
    }

    pub fn count(
        &self,
        player: PlayerId,
        serve_type: ServeType,
        zone: ServeZone,
        outcome: ServeOutcome,
    ) -> u64 {
        self.0.get(player).map_or(0, |tree| {
            *tree
                .get(serve_type.code() as usize)
                .get(zone.code() as usize)
                .get(outcome.code() as usize)
        })
    }

    /// Serves of a player by outcome code 1-4, over all types and zones.
    pub fn outcomes(&self, player: PlayerId) -> [u64; 4] {
        let mut outcomes = [0; 4];
        if let Some(tree) = self.0.get(player) {
            for (_, zones) in tree.iter() {
                for (_, by_outcome) in zones.iter() {
                    for (outcome, count) in by_outcome.iter() {
                        outcomes[outcome - 1] += count;
                    }
                }
            }
        }
        outcomes
    }

    pub fn by_player(&self) -> &ByPlayer<ServeTree> {
        &self.0
    }

    pub fn merge(&mut self, other: &Self) {
        self.0.merge(&other.0);
    }
}
