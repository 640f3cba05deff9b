//! Rally state machine.
//!
//! A rally line is decoded by a [`RallyMachine`] that walks the tokens one at
//! a time. What a token means depends entirely on the current [`Mode`]: the
//! same run of three dots is a serve outcome in one mode and a set
//! destination in another. Every resolved sequence emits an [`Event`].

mod event;
mod machine;
mod warning;

use std::fmt;

use serde::Serialize;

pub use event::{AttackEvent, Event, PointEvent, ReceptionEvent, ServeEvent, SetEvent};
pub use machine::{decode_rally, RallyContext, RallyMachine, RallyOutcome};
pub use warning::{RallyWarning, WarningKind};

/// What the machine expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    AwaitingAction,
    AwaitingServeZone,
    AwaitingServeOutcome,
    AwaitingReceptionType,
    AwaitingReceivingPosition,
    AwaitingReceptionOutcome,
    AwaitingPossibleReturn,
    AwaitingSetDestination,
    AwaitingSetType,
    AwaitingZoneOfHit,
    AwaitingOutcomeOfHit,
    /// Terminal: serve ace.
    Ace,
    /// Terminal: serve into the net or out.
    ServeError,
    /// Terminal: attack point or block-out.
    AttackPoint,
    /// Terminal: attack blocked or hit out.
    AttackLost,
}

impl Mode {
    /// Terminal modes only accept an empty token.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Mode::Ace | Mode::ServeError | Mode::AttackPoint | Mode::AttackLost
        )
    }

    fn description(self) -> &'static str {
        match self {
            Mode::AwaitingAction => "awaiting action",
            Mode::AwaitingServeZone => "awaiting serve zone",
            Mode::AwaitingServeOutcome => "awaiting serve outcome",
            Mode::AwaitingReceptionType => "awaiting reception type",
            Mode::AwaitingReceivingPosition => "awaiting receiving position",
            Mode::AwaitingReceptionOutcome => "awaiting reception outcome",
            Mode::AwaitingPossibleReturn => "awaiting possible return",
            Mode::AwaitingSetDestination => "awaiting set destination",
            Mode::AwaitingSetType => "awaiting set type",
            Mode::AwaitingZoneOfHit => "awaiting zone of hit",
            Mode::AwaitingOutcomeOfHit => "awaiting outcome of hit",
            Mode::Ace => "after an ace",
            Mode::ServeError => "after a serve error",
            Mode::AttackPoint => "after an attack point",
            Mode::AttackLost => "after a lost attack",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Whether our team is serving or receiving in the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamMode {
    #[default]
    Unknown,
    Serving,
    Receiving,
}

/// Attack complex: K1 is built from a reception, K2 from a dig or free ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Complex {
    #[serde(rename = "K1")]
    FromReception,
    #[serde(rename = "K2")]
    FromDefense,
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complex::FromReception => f.write_str("K1"),
            Complex::FromDefense => f.write_str("K2"),
        }
    }
}
