use serde::Serialize;

use super::tally::{ByPlayer, Dim, Tally};
use crate::lineup::{PlayerId, SLOTS};
use crate::notation::codes::{Code, SetDestination, SetType};
use crate::rally::SetEvent;

/// Rotation (0-5) → destination (1-7) → set type (1-4).
pub type SetTree =
    Dim<Dim<Dim<u64, { SetType::COUNT }, 1>, { SetDestination::KEYS }, 1>, SLOTS, 0>;

/// Set distribution of one complex, per setter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sets(ByPlayer<SetTree>);

impl Sets {
    pub fn record(&mut self, event: &SetEvent) {
        *self
            .0
            .entry(event.setter)
            .get_mut(event.rotation)
            .get_mut(event.destination.code() as usize)
            .get_mut(event.set_type.code() as usize) += 1;
    }

    pub fn count(
        &self,
        setter: PlayerId,
        rotation: usize,
        destination: SetDestination,
        set_type: SetType,
    ) -> u64 {
        self.0.get(setter).map_or(0, |tree| {
            *tree
                .get(rotation)
                .get(destination.code() as usize)
                .get(set_type.code() as usize)
        })
    }

    /// Sets per destination in one rotation, summed over set types.
    pub fn distribution(&self, setter: PlayerId, rotation: usize) -> Vec<(SetDestination, u64)> {
        SetDestination::ALL
            .iter()
            .map(|destination| {
                let total = self.0.get(setter).map_or(0, |tree| {
                    tree.get(rotation).get(destination.code() as usize).total()
                });
                (*destination, total)
            })
            .collect()
    }

    pub fn by_player(&self) -> &ByPlayer<SetTree> {
        &self.0
    }

    pub fn merge(&mut self, other: &Self) {
        self.0.merge(&other.0);
    }
}
