//! Non-fatal findings collected while decoding.

use std::fmt;

use crate::lineup::{LineupWarning, PlayerId};
use crate::notation::codes::ServeType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Hitter lookup had to use the other row.
    RowFallback(LineupWarning),
    /// Server missing from the serve-type table.
    UnknownServeType { player: PlayerId, assumed: ServeType },
}

/// A warning with the rally and token it was raised at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RallyWarning {
    pub rally: usize,
    /// 0-based token index.
    pub token: usize,
    pub kind: WarningKind,
}

impl fmt::Display for RallyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rally {}, token {}: ", self.rally, self.token + 1)?;
        match &self.kind {
            WarningKind::RowFallback(warning) => write!(f, "{}", warning),
            WarningKind::UnknownServeType { player, assumed } => write!(
                f,
                "no serve type listed for player {}, assuming {}",
                player,
                assumed.label()
            ),
        }
    }
}
