//! Length-encoded notation codes.
//!
//! Every action token is a run of one marker character and its length selects
//! an option. The same length means different things depending on what the
//! scout is describing, so each kind of value gets its own enum with an
//! explicit length table. Keeping the tables here (instead of inside the state
//! machine) makes them auditable and testable on their own.

use serde::{Deserialize, Serialize};

/// A value decoded from the length of a marker run.
pub trait Code: Copy + Sized {
    /// Human readable range used in decode errors, e.g. `"1..10"`.
    const EXPECTED: &'static str;

    /// Decode a run length. `None` means the length is not part of the table.
    fn from_len(len: usize) -> Option<Self>;

    /// The numeric code (equal to the run length that produced it).
    fn code(self) -> u8;
}

/// Top level action: who touches the ball first in a new point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Serve,
    Reception,
}

impl Code for ActionKind {
    const EXPECTED: &'static str = "1 (serve) or 2 (reception)";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Serve),
            2 => Some(Self::Reception),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Serve => 1,
            Self::Reception => 2,
        }
    }
}

/// Target zone of a serve.
///
/// Zones 1-9 run from the opponent's front-left half along the receivers to
/// the front-right half; zone 10 marks serves that can't be attributed to a
/// zone (net errors and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServeZone(u8);

impl ServeZone {
    pub const COUNT: usize = 10;
    pub const NOT_ATTRIBUTABLE: ServeZone = ServeZone(10);
}

impl Code for ServeZone {
    const EXPECTED: &'static str = "1..10";

    fn from_len(len: usize) -> Option<Self> {
        (1..=Self::COUNT).contains(&len).then_some(Self(len as u8))
    }

    fn code(self) -> u8 {
        self.0
    }
}

/// What happened to a serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    Ace,
    /// Reception went straight back over the net.
    Overpass,
    Received,
    Error,
}

impl Code for ServeOutcome {
    const EXPECTED: &'static str = "1 (ace), 2 (overpass), 3 (received) or 4 (error)";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Ace),
            2 => Some(Self::Overpass),
            3 => Some(Self::Received),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Overpass => 2,
            Self::Received => 3,
            Self::Error => 4,
        }
    }
}

/// Serve type as seen by our receivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceptionType {
    Float,
    Jump,
}

impl Code for ReceptionType {
    const EXPECTED: &'static str = "1 (float) or 2 (jump)";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Float),
            2 => Some(Self::Jump),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Float => 1,
            Self::Jump => 2,
        }
    }
}

/// Court position a reception is taken from. Only the positions of the
/// receiving formation exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceivingPosition {
    One,
    Three,
    Five,
    Six,
}

impl ReceivingPosition {
    pub const ALL: [ReceivingPosition; 4] = [Self::One, Self::Three, Self::Five, Self::Six];
}

impl Code for ReceivingPosition {
    const EXPECTED: &'static str = "1, 3, 5 or 6";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::One),
            3 => Some(Self::Three),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Five => 5,
            Self::Six => 6,
        }
    }
}

/// Quality of a reception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceptionOutcome {
    Perfect,
    Okay,
    Bad,
    /// Aced, or the ball went straight back to the opponent.
    Error,
}

impl Code for ReceptionOutcome {
    const EXPECTED: &'static str = "1 (perfect), 2 (okay), 3 (bad) or 4 (error)";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Perfect),
            2 => Some(Self::Okay),
            3 => Some(Self::Bad),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Perfect => 1,
            Self::Okay => 2,
            Self::Bad => 3,
            Self::Error => 4,
        }
    }
}

/// How the opponent sent the ball back. Written with the return marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Attack,
    FreeBall,
}

impl Code for ReturnKind {
    const EXPECTED: &'static str = "1 (attack) or 2 (free ball)";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Attack),
            2 => Some(Self::FreeBall),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Attack => 1,
            Self::FreeBall => 2,
        }
    }
}

/// Where the setter sent the ball. Codes follow court positions; 5 does not
/// exist and 7 is the setter attacking the second ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetDestination {
    /// Back-row attack from position 1.
    RightBack,
    /// Front-row attack from position 2.
    RightFront,
    Middle,
    /// Front-row attack from position 4.
    LeftFront,
    /// Back-row attack from position 6.
    Pipe,
    SetterDump,
}

impl SetDestination {
    pub const ALL: [SetDestination; 6] = [
        Self::RightBack,
        Self::RightFront,
        Self::Middle,
        Self::LeftFront,
        Self::Pipe,
        Self::SetterDump,
    ];

    /// Number of keys in a destination dimension (codes 1..=7).
    pub const KEYS: usize = 7;
}

impl Code for SetDestination {
    const EXPECTED: &'static str = "1, 2, 3, 4, 6 or 7";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::RightBack),
            2 => Some(Self::RightFront),
            3 => Some(Self::Middle),
            4 => Some(Self::LeftFront),
            6 => Some(Self::Pipe),
            7 => Some(Self::SetterDump),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::RightBack => 1,
            Self::RightFront => 2,
            Self::Middle => 3,
            Self::LeftFront => 4,
            Self::Pipe => 6,
            Self::SetterDump => 7,
        }
    }
}

/// Set type. Middles: 1 quick, 2 quick behind, 3 shoot, 4 push.
/// Outsides and opposites: 1 fast, 2 normal, 3 high. Setter dumps use 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetType(u8);

impl SetType {
    pub const COUNT: usize = 4;
}

impl Code for SetType {
    const EXPECTED: &'static str = "1..4";

    fn from_len(len: usize) -> Option<Self> {
        (1..=Self::COUNT).contains(&len).then_some(Self(len as u8))
    }

    fn code(self) -> u8 {
        self.0
    }
}

/// Attack zone. 1-5 split the opponent court from left to right as seen by
/// the hitter, 6 is a short tip and 7 is not attributable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HitZone(u8);

impl HitZone {
    pub const COUNT: usize = 7;
}

impl Code for HitZone {
    const EXPECTED: &'static str = "1..7";

    fn from_len(len: usize) -> Option<Self> {
        (1..=Self::COUNT).contains(&len).then_some(Self(len as u8))
    }

    fn code(self) -> u8 {
        self.0
    }
}

/// Result of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Point,
    Defended,
    BlockOut,
    Blocked,
    Error,
}

impl AttackOutcome {
    pub const COUNT: usize = 5;

    /// Whether the attacking team wins the point.
    pub fn wins_point(self) -> Option<bool> {
        match self {
            Self::Point | Self::BlockOut => Some(true),
            Self::Blocked | Self::Error => Some(false),
            Self::Defended => None,
        }
    }
}

impl Code for AttackOutcome {
    const EXPECTED: &'static str =
        "1 (point), 2 (defended), 3 (block-out), 4 (blocked) or 5 (error)";

    fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::Point),
            2 => Some(Self::Defended),
            3 => Some(Self::BlockOut),
            4 => Some(Self::Blocked),
            5 => Some(Self::Error),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Point => 1,
            Self::Defended => 2,
            Self::BlockOut => 3,
            Self::Blocked => 4,
            Self::Error => 5,
        }
    }
}

/// Serve technique of one of our servers, taken from the serve-type table of
/// the transcript rather than from action tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeType {
    Float,
    Jump,
    /// Jump serve after a float toss (hybrid).
    JumpAfterFloatToss,
    FloatAfterJumpToss,
}

impl ServeType {
    pub const COUNT: usize = 4;

    pub fn code(self) -> u8 {
        match self {
            Self::Float => 1,
            Self::Jump => 2,
            Self::JumpAfterFloatToss => 3,
            Self::FloatAfterJumpToss => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Float),
            2 => Some(Self::Jump),
            3 => Some(Self::JumpAfterFloatToss),
            4 => Some(Self::FloatAfterJumpToss),
            _ => None,
        }
    }

    /// Parse a serve-type table entry: `F`, `J`, `H` (hybrid) or a digit 1-4.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "F" | "f" => Some(Self::Float),
            "J" | "j" => Some(Self::Jump),
            "H" | "h" => Some(Self::JumpAfterFloatToss),
            _ => s.parse::<u8>().ok().and_then(Self::from_code),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Jump => "jump",
            Self::JumpAfterFloatToss => "jump (float toss)",
            Self::FloatAfterJumpToss => "float (jump toss)",
        }
    }
}
