//! Lineup and rotation tracking.
//!
//! A [`Lineup`] is the single source of truth for who stands where during one
//! rally line: the six court slots in serving order, the role of every slot,
//! the setter and the libero. It is rebuilt from the header of every rally
//! line and mutated by substitutions and side-out rotations while the line is
//! decoded.
//!
//! Slots are 0-based (slot 0 = court position 1); rotations are the slot of
//! the setter (0-5).

mod error;
mod roles;

use std::fmt;

use crate::notation::codes::{ReceivingPosition, SetDestination};

pub use error::{LineupError, LineupWarning};
pub use roles::{roles_for_setter_slot, Receiver, Role, Row, RECEIVING_PATTERNS, SLOTS};

/// Shirt number of a player.
pub type PlayerId = u32;

/// A substitution noted between action tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// `<out-in>`
    Replace { out: PlayerId, incoming: PlayerId },
    /// `<->`: setter and opposite already swapped places; only the role labels
    /// need to follow.
    Diagonal,
}

impl Substitution {
    /// Parse `<out-in>` or `<->`.
    pub fn parse(text: &str) -> Option<Self> {
        let inner = text.strip_prefix('<')?.strip_suffix('>')?;
        if inner == "-" {
            return Some(Substitution::Diagonal);
        }
        let (out, incoming) = inner.split_once('-')?;
        Some(Substitution::Replace {
            out: out.trim().parse().ok()?,
            incoming: incoming.trim().parse().ok()?,
        })
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substitution::Replace { out, incoming } => write!(f, "<{}-{}>", out, incoming),
            Substitution::Diagonal => f.write_str("<->"),
        }
    }
}

/// Result of a hitter lookup, with a warning when the row fallback was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitterLookup {
    pub player: PlayerId,
    pub warning: Option<LineupWarning>,
}

/// Current on-court state of our team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineup {
    players: [PlayerId; SLOTS],
    roles: [Role; SLOTS],
    setter: PlayerId,
    libero: PlayerId,
}

impl Lineup {
    /// Build a lineup from `p1 p2 p3 p4 p5 p6 setter libero`.
    pub fn from_header(header: &str) -> Result<Self, LineupError> {
        let numbers = header
            .split_whitespace()
            .map(|field| {
                field
                    .parse::<PlayerId>()
                    .map_err(|_| LineupError::InvalidPlayer(field.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if numbers.len() != SLOTS + 2 {
            return Err(LineupError::FieldCount(numbers.len()));
        }

        let mut players = [0; SLOTS];
        players.copy_from_slice(&numbers[..SLOTS]);
        Self::new(players, numbers[SLOTS], numbers[SLOTS + 1])
    }

    /// Build a lineup from court players in serving order.
    pub fn new(
        players: [PlayerId; SLOTS],
        setter: PlayerId,
        libero: PlayerId,
    ) -> Result<Self, LineupError> {
        for (i, player) in players.iter().enumerate() {
            if players[..i].contains(player) {
                return Err(LineupError::DuplicatePlayer(*player));
            }
        }
        if players.contains(&libero) {
            return Err(LineupError::LiberoOnCourt(libero));
        }

        let setter_slot = players
            .iter()
            .position(|p| *p == setter)
            .ok_or(LineupError::SetterNotOnCourt {
                setter,
                court: players,
            })?;

        Ok(Self {
            players,
            roles: roles_for_setter_slot(setter_slot),
            setter,
            libero,
        })
    }

    pub fn players(&self) -> &[PlayerId; SLOTS] {
        &self.players
    }

    pub fn roles(&self) -> &[Role; SLOTS] {
        &self.roles
    }

    pub fn setter(&self) -> PlayerId {
        self.setter
    }

    pub fn libero(&self) -> PlayerId {
        self.libero
    }

    /// The player serving from position 1.
    pub fn server(&self) -> PlayerId {
        self.players[0]
    }

    /// Rotation as the slot of the setter role (0-5).
    pub fn rotation(&self) -> usize {
        self.roles
            .iter()
            .position(|r| *r == Role::Setter)
            .unwrap_or_default()
    }

    /// Shift every player and role one slot forward (slot i takes slot i+1).
    pub fn rotate(&mut self) {
        self.players.rotate_left(1);
        self.roles.rotate_left(1);
    }

    pub fn apply_substitution(&mut self, substitution: &Substitution) -> Result<(), LineupError> {
        match *substitution {
            Substitution::Diagonal => {
                let setter_slot = self.rotation();
                let opposite_slot = self.slot_of_role(Role::Opposite, None).unwrap_or_default();
                self.roles.swap(setter_slot, opposite_slot);
                self.setter = self.players[opposite_slot];
                Ok(())
            }
            Substitution::Replace { out, incoming } if out == self.libero => {
                self.libero = incoming;
                Ok(())
            }
            Substitution::Replace { out, incoming } => {
                let slot = self.players.iter().position(|p| *p == out).ok_or(
                    LineupError::PlayerNotOnCourt {
                        player: out,
                        court: self.players,
                    },
                )?;
                if self.players.contains(&incoming) {
                    return Err(LineupError::AlreadyOnCourt(incoming));
                }
                self.players[slot] = incoming;
                if out == self.setter {
                    self.setter = incoming;
                }
                Ok(())
            }
        }
    }

    /// Player receiving serve on a court position.
    pub fn receiver_for_position(&self, position: ReceivingPosition) -> PlayerId {
        let column = match position {
            ReceivingPosition::One => 0,
            ReceivingPosition::Three => 1,
            ReceivingPosition::Five => 2,
            ReceivingPosition::Six => 3,
        };
        match RECEIVING_PATTERNS[self.rotation()][column] {
            Receiver::Slot(slot) => self.players[slot],
            Receiver::Libero => self.libero,
        }
    }

    /// Player attacking a set to `destination`.
    ///
    /// Destination 2 is the front-row opposite and 4 the front-row outside,
    /// except in rotation 0 where the two swap. When a role is missing from
    /// the expected row the other row is used and a warning is returned.
    pub fn hitter_for_destination(&self, destination: SetDestination) -> HitterLookup {
        let swapped = self.rotation() == 0;
        let (role, row) = match destination {
            SetDestination::SetterDump => {
                return HitterLookup {
                    player: self.setter,
                    warning: None,
                }
            }
            SetDestination::RightBack => (Role::Opposite, Row::Back),
            SetDestination::RightFront if swapped => (Role::OutsideHitter, Row::Front),
            SetDestination::RightFront => (Role::Opposite, Row::Front),
            SetDestination::Middle => (Role::Middle, Row::Front),
            SetDestination::LeftFront if swapped => (Role::Opposite, Row::Front),
            SetDestination::LeftFront => (Role::OutsideHitter, Row::Front),
            SetDestination::Pipe => (Role::OutsideHitter, Row::Back),
        };

        if let Some(slot) = self.slot_of_role(role, Some(row)) {
            return HitterLookup {
                player: self.players[slot],
                warning: None,
            };
        }

        // Every role is on court, so the other row has it.
        let slot = self
            .slot_of_role(role, Some(row.other()))
            .unwrap_or_default();
        HitterLookup {
            player: self.players[slot],
            warning: Some(LineupWarning::RowFallback {
                destination,
                role,
                expected: row,
                court: self.players,
            }),
        }
    }

    fn slot_of_role(&self, role: Role, row: Option<Row>) -> Option<usize> {
        (0..SLOTS).find(|slot| {
            self.roles[*slot] == role && row.map_or(true, |row| Row::of_slot(*slot) == row)
        })
    }
}

impl fmt::Display for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (player, role)) in self.players.iter().zip(self.roles.iter()).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", player, role)?;
        }
        write!(f, " L:{}", self.libero)
    }
}
