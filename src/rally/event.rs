//! Events emitted by the rally state machine.

use super::Complex;
use crate::lineup::PlayerId;
use crate::notation::codes::{
    AttackOutcome, HitZone, ReceivingPosition, ReceptionOutcome, ReceptionType, ServeOutcome,
    ServeType, ServeZone, SetDestination, SetType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeEvent {
    pub server: PlayerId,
    pub serve_type: ServeType,
    pub zone: ServeZone,
    pub outcome: ServeOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceptionEvent {
    pub player: PlayerId,
    pub reception_type: ReceptionType,
    pub position: ReceivingPosition,
    pub outcome: ReceptionOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetEvent {
    pub setter: PlayerId,
    /// Setter slot (0-5) when the ball was set.
    pub rotation: usize,
    pub destination: SetDestination,
    pub set_type: SetType,
    pub complex: Complex,
    /// Court position of the reception this set was built from (K1 only).
    pub reception_position: Option<ReceivingPosition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackEvent {
    pub hitter: PlayerId,
    pub destination: SetDestination,
    pub set_type: SetType,
    pub zone: HitZone,
    pub outcome: AttackOutcome,
    pub complex: Complex,
}

/// A point played on our serve whose winner is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointEvent {
    pub won: bool,
    /// Rotation the point was served in.
    pub rotation: usize,
    pub server: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Serve(ServeEvent),
    Reception(ReceptionEvent),
    Set(SetEvent),
    Attack(AttackEvent),
    PointClosed(PointEvent),
}
