use serde::Serialize;

use super::tally::{ByPlayer, Dim};
use crate::lineup::PlayerId;
use crate::notation::codes::{AttackOutcome, Code, HitZone, SetDestination, SetType};
use crate::rally::AttackEvent;

/// Hitting position (destination 1-7) → set type (1-4) → zone (1-7) →
/// outcome (1-5).
pub type AttackTree = Dim<
    Dim<Dim<Dim<u64, { AttackOutcome::COUNT }, 1>, { HitZone::COUNT }, 1>, { SetType::COUNT }, 1>,
    { SetDestination::KEYS },
    1,
>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attacks(ByPlayer<AttackTree>);

impl Attacks {
    pub fn record(&mut self, event: &AttackEvent) {
        *self
            .0
            .entry(event.hitter)
            .get_mut(event.destination.code() as usize)
            .get_mut(event.set_type.code() as usize)
            .get_mut(event.zone.code() as usize)
            .get_mut(event.outcome.code() as usize) += 1;
    }

    pub fn count(
        &self,
        player: PlayerId,
        destination: SetDestination,
        set_type: SetType,
        zone: HitZone,
        outcome: AttackOutcome,
    ) -> u64 {
        self.0.get(player).map_or(0, |tree| {
            *tree
                .get(destination.code() as usize)
                .get(set_type.code() as usize)
                .get(zone.code() as usize)
                .get(outcome.code() as usize)
        })
    }

    /// Attacks of a player by outcome code 1-5, over everything else.
    pub fn outcomes(&self, player: PlayerId) -> [u64; AttackOutcome::COUNT] {
        let mut outcomes = [0; AttackOutcome::COUNT];
        for (_, _, _, by_outcome) in self.leaves(player) {
            for (outcome, count) in by_outcome.iter() {
                outcomes[outcome - 1] += count;
            }
        }
        outcomes
    }

    /// Outcome nodes of a player with their destination, set type and zone.
    pub fn leaves(
        &self,
        player: PlayerId,
    ) -> impl Iterator<Item = (usize, usize, usize, &Dim<u64, { AttackOutcome::COUNT }, 1>)> {
        self.0.get(player).into_iter().flat_map(|tree| {
            tree.iter().flat_map(|(destination, types)| {
                types.iter().flat_map(move |(set_type, zones)| {
                    zones
                        .iter()
                        .map(move |(zone, outcomes)| (destination, set_type, zone, outcomes))
                })
            })
        })
    }

    pub fn by_player(&self) -> &ByPlayer<AttackTree> {
        &self.0
    }

    pub fn merge(&mut self, other: &Self) {
        self.0.merge(&other.0);
    }
}
