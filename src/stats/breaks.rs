use std::collections::BTreeMap;

use serde::Serialize;

use super::tally::Dim;
use crate::lineup::{PlayerId, SLOTS};
use crate::rally::PointEvent;

/// Points on our serve: +1 per breakpoint won, -1 per point lost while
/// serving, by rotation. Servers get a credit per breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breaks {
    by_rotation: Dim<i64, SLOTS, 0>,
    players: BTreeMap<PlayerId, u64>,
}

impl Breaks {
    pub fn record(&mut self, event: &PointEvent) {
        if event.won {
            *self.by_rotation.get_mut(event.rotation) += 1;
            *self.players.entry(event.server).or_default() += 1;
        } else {
            *self.by_rotation.get_mut(event.rotation) -= 1;
        }
    }

    pub fn rotation(&self, rotation: usize) -> i64 {
        *self.by_rotation.get(rotation)
    }

    pub fn by_rotation(&self) -> &Dim<i64, SLOTS, 0> {
        &self.by_rotation
    }

    pub fn credits(&self, player: PlayerId) -> u64 {
        self.players.get(&player).copied().unwrap_or_default()
    }

    pub fn players(&self) -> &BTreeMap<PlayerId, u64> {
        &self.players
    }

    pub fn merge(&mut self, other: &Self) {
        for (rotation, count) in other.by_rotation.iter() {
            *self.by_rotation.get_mut(rotation) += count;
        }
        for (player, credits) in &other.players {
            *self.players.entry(*player).or_default() += credits;
        }
    }
}
