//! Court roles and the fixed rotation patterns derived from them.

use std::fmt;

use serde::Serialize;

/// Number of court slots. Slot 0 is court position 1 (the server).
pub const SLOTS: usize = 6;

/// Player role in the 5-1 system, assigned relative to the setter's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Setter,
    Opposite,
    OutsideHitter,
    Middle,
}

impl Role {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Role::Setter => "S",
            Role::Opposite => "OP",
            Role::OutsideHitter => "OH",
            Role::Middle => "MI",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Roles by offset from the setter slot: setter, +1 outside, +2 middle,
/// +3 opposite, +4 outside, +5 middle.
const ROLE_OFFSETS: [Role; SLOTS] = [
    Role::Setter,
    Role::OutsideHitter,
    Role::Middle,
    Role::Opposite,
    Role::OutsideHitter,
    Role::Middle,
];

/// Role assignment for every slot when the setter stands in `setter_slot`.
pub fn roles_for_setter_slot(setter_slot: usize) -> [Role; SLOTS] {
    std::array::from_fn(|slot| ROLE_OFFSETS[(slot + SLOTS - setter_slot % SLOTS) % SLOTS])
}

/// Front row (positions 2, 3, 4) or back row (positions 1, 5, 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Row {
    Front,
    Back,
}

impl Row {
    pub fn of_slot(slot: usize) -> Row {
        match slot {
            1..=3 => Row::Front,
            _ => Row::Back,
        }
    }

    pub fn other(self) -> Row {
        match self {
            Row::Front => Row::Back,
            Row::Back => Row::Front,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Front => f.write_str("front row"),
            Row::Back => f.write_str("back row"),
        }
    }
}

/// Who covers a receiving position: a court slot or the libero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Slot(usize),
    Libero,
}

/// Receiving formation per rotation (setter slot 0-5), in court-position
/// order 1, 3, 5, 6.
///
/// Position 3 is the front-row middle and position 5 an outside hitter (the
/// front-row one, except in rotation 0 where the back-row outside takes 5 and
/// the front-row outside takes 1). The back-row outside receives on 1 when
/// standing in slot 0 and on 6 otherwise. The libero fills the gap.
pub const RECEIVING_PATTERNS: [[Receiver; 4]; SLOTS] = [
    [
        Receiver::Slot(1),
        Receiver::Slot(2),
        Receiver::Slot(4),
        Receiver::Libero,
    ],
    [
        Receiver::Libero,
        Receiver::Slot(3),
        Receiver::Slot(2),
        Receiver::Slot(5),
    ],
    [
        Receiver::Slot(0),
        Receiver::Slot(1),
        Receiver::Slot(3),
        Receiver::Libero,
    ],
    [
        Receiver::Libero,
        Receiver::Slot(2),
        Receiver::Slot(1),
        Receiver::Slot(4),
    ],
    [
        Receiver::Libero,
        Receiver::Slot(3),
        Receiver::Slot(2),
        Receiver::Slot(5),
    ],
    [
        Receiver::Slot(0),
        Receiver::Slot(1),
        Receiver::Slot(3),
        Receiver::Libero,
    ],
];
