//! Plausibility checks over aggregated counts.

use std::fmt;

use super::Attacks;
use crate::lineup::PlayerId;
use crate::notation::codes::{AttackOutcome, Code, HitZone, SetDestination, SetType};

/// Attacks recorded with an outcome the court geometry rules out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneInconsistency {
    pub player: PlayerId,
    pub destination: SetDestination,
    pub set_type: SetType,
    pub zone: HitZone,
    pub outcome: AttackOutcome,
    pub count: u64,
}

impl fmt::Display for ZoneInconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {}: {} attack(s) from position {} (set type {}) into zone {} recorded as {}",
            self.player,
            self.count,
            self.destination.code(),
            self.set_type.code(),
            self.zone.code(),
            match self.outcome {
                AttackOutcome::BlockOut => "block-out",
                _ => "blocked",
            }
        )
    }
}

/// Block-outs and blocks can't end in zones 2-4 unless the attack came from
/// the middle (3) or the pipe (6).
pub fn attack_zone_consistency(attacks: &Attacks) -> Vec<ZoneInconsistency> {
    let mut found = Vec::new();

    for (player, _) in attacks.by_player().players() {
        for (destination, set_type, zone, outcomes) in attacks.leaves(player) {
            if matches!(destination, 3 | 6) || !(2..=4).contains(&zone) {
                continue;
            }
            for outcome in [AttackOutcome::BlockOut, AttackOutcome::Blocked] {
                let count = *outcomes.get(outcome.code() as usize);
                if count == 0 {
                    continue;
                }
                let (Some(destination), Some(set_type), Some(zone)) = (
                    SetDestination::from_len(destination),
                    SetType::from_len(set_type),
                    HitZone::from_len(zone),
                ) else {
                    continue;
                };
                found.push(ZoneInconsistency {
                    player,
                    destination,
                    set_type,
                    zone,
                    outcome,
                    count,
                });
            }
        }
    }

    found
}
