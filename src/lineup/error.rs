//! Lineup errors and warnings.

use super::{PlayerId, Role, Row};
use crate::notation::codes::SetDestination;

/// Errors raised while building or mutating a lineup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineupError {
    #[error("lineup header needs 8 numbers (6 court players, setter, libero), got {0}")]
    FieldCount(usize),

    #[error("'{0}' is not a player number")]
    InvalidPlayer(String),

    #[error("setter {setter} is not on court {court:?}")]
    SetterNotOnCourt { setter: PlayerId, court: [PlayerId; 6] },

    #[error("player {0} is listed twice on court")]
    DuplicatePlayer(PlayerId),

    #[error("libero {0} is also listed as a court player")]
    LiberoOnCourt(PlayerId),

    #[error("player {player} is not on court {court:?}")]
    PlayerNotOnCourt { player: PlayerId, court: [PlayerId; 6] },

    #[error("player {0} is already on court")]
    AlreadyOnCourt(PlayerId),
}

/// A scouting inconsistency the lineup could work around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineupWarning {
    /// The role expected for a set destination was not in the expected row,
    /// so the player of that role in the other row was used.
    RowFallback {
        destination: SetDestination,
        role: Role,
        expected: Row,
        court: [PlayerId; 6],
    },
}

impl std::fmt::Display for LineupWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineupWarning::RowFallback {
                destination,
                role,
                expected,
                court,
            } => write!(
                f,
                "no {} in the {} for set destination {} (court {:?}), assuming the {} one",
                role,
                expected,
                crate::notation::codes::Code::code(*destination),
                court,
                expected.other()
            ),
        }
    }
}
