//! Statistical aggregators.
//!
//! Every category is a typed counter tree per player. Trees only grow by
//! increments and merge by addition, so per-rally results can be combined in
//! any order.

mod attacks;
mod breaks;
mod receptions;
mod serves;
mod sets;
pub mod tally;
pub mod validate;

pub use attacks::{AttackTree, Attacks};
pub use breaks::Breaks;
pub use receptions::{ReceptionTree, Receptions};
pub use serves::{ServeTree, Serves};
pub use sets::{SetTree, Sets};

use crate::notation::codes::ReceivingPosition;
use crate::rally::{Complex, Event};

/// All aggregators of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub serves: Serves,
    pub receptions: Receptions,
    /// Sets built from a reception.
    pub sets_k1: Sets,
    /// Sets built from a dig or free ball.
    pub sets_k2: Sets,
    /// K1 sets after a reception on court position 1.
    pub sets_k1_pos1: Sets,
    pub attacks: Attacks,
    pub breaks: Breaks,
}

impl Stats {
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Serve(serve) => self.serves.record(serve),
            Event::Reception(reception) => self.receptions.record(reception),
            Event::Set(set) => match set.complex {
                Complex::FromReception => {
                    self.sets_k1.record(set);
                    if set.reception_position == Some(ReceivingPosition::One) {
                        self.sets_k1_pos1.record(set);
                    }
                }
                Complex::FromDefense => self.sets_k2.record(set),
            },
            Event::Attack(attack) => self.attacks.record(attack),
            Event::PointClosed(point) => self.breaks.record(point),
        }
    }

    pub fn record_all<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn merge(&mut self, other: &Stats) {
        self.serves.merge(&other.serves);
        self.receptions.merge(&other.receptions);
        self.sets_k1.merge(&other.sets_k1);
        self.sets_k2.merge(&other.sets_k2);
        self.sets_k1_pos1.merge(&other.sets_k1_pos1);
        self.attacks.merge(&other.attacks);
        self.breaks.merge(&other.breaks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::codes::{
        AttackOutcome, Code, HitZone, ReceptionOutcome, ReceptionType, ServeOutcome, ServeType,
        ServeZone, SetDestination, SetType,
    };
    use crate::rally::{AttackEvent, PointEvent, ReceptionEvent, ServeEvent, SetEvent};

    fn serve(server: u32, zone: usize, outcome: usize) -> Event {
        Event::Serve(ServeEvent {
            server,
            serve_type: ServeType::Jump,
            zone: ServeZone::from_len(zone).unwrap(),
            outcome: ServeOutcome::from_len(outcome).unwrap(),
        })
    }

    fn set(complex: Complex, position: Option<ReceivingPosition>) -> Event {
        Event::Set(SetEvent {
            setter: 4,
            rotation: 3,
            destination: SetDestination::LeftFront,
            set_type: SetType::from_len(2).unwrap(),
            complex,
            reception_position: position,
        })
    }

    fn point(won: bool, rotation: usize, server: u32) -> Event {
        Event::PointClosed(PointEvent {
            won,
            rotation,
            server,
        })
    }

    #[test]
    fn identical_key_paths_count_twice_and_touch_nothing_else() {
        let mut stats = Stats::default();
        stats.record(&serve(1, 5, 3));
        stats.record(&serve(1, 5, 3));

        let zone = ServeZone::from_len(5).unwrap();
        assert_eq!(
            stats
                .serves
                .count(1, ServeType::Jump, zone, ServeOutcome::Received),
            2
        );
        assert_eq!(stats.serves.by_player().total(), 2);
        assert_eq!(stats.serves.outcomes(1), [0, 0, 2, 0]);
        assert_eq!(stats.attacks.by_player().total(), 0);
        assert!(stats.receptions.by_player().is_empty());
    }

    #[test]
    fn sets_are_split_by_complex_and_reception_position() {
        let mut stats = Stats::default();
        stats.record(&set(Complex::FromReception, Some(ReceivingPosition::One)));
        stats.record(&set(Complex::FromReception, Some(ReceivingPosition::Five)));
        stats.record(&set(Complex::FromDefense, None));

        let two = SetType::from_len(2).unwrap();
        assert_eq!(stats.sets_k1.count(4, 3, SetDestination::LeftFront, two), 2);
        assert_eq!(stats.sets_k2.count(4, 3, SetDestination::LeftFront, two), 1);
        assert_eq!(
            stats.sets_k1_pos1.count(4, 3, SetDestination::LeftFront, two),
            1
        );
        assert_eq!(
            stats.sets_k1.distribution(4, 3),
            vec![
                (SetDestination::RightBack, 0),
                (SetDestination::RightFront, 0),
                (SetDestination::Middle, 0),
                (SetDestination::LeftFront, 2),
                (SetDestination::Pipe, 0),
                (SetDestination::SetterDump, 0),
            ]
        );
    }

    #[test]
    fn breakpoints_are_signed_per_rotation() {
        let mut stats = Stats::default();
        stats.record(&point(true, 2, 7));
        stats.record(&point(true, 2, 7));
        stats.record(&point(false, 2, 7));
        stats.record(&point(false, 5, 3));

        assert_eq!(stats.breaks.rotation(2), 1);
        assert_eq!(stats.breaks.rotation(5), -1);
        assert_eq!(stats.breaks.rotation(0), 0);
        assert_eq!(stats.breaks.credits(7), 2);
        assert_eq!(stats.breaks.credits(3), 0);
    }

    #[test]
    fn merge_equals_recording_everything_at_once() {
        let events = vec![
            serve(1, 5, 3),
            serve(2, 10, 4),
            Event::Reception(ReceptionEvent {
                player: 9,
                reception_type: ReceptionType::Float,
                position: ReceivingPosition::One,
                outcome: ReceptionOutcome::Perfect,
            }),
            set(Complex::FromReception, Some(ReceivingPosition::One)),
            Event::Attack(AttackEvent {
                hitter: 2,
                destination: SetDestination::LeftFront,
                set_type: SetType::from_len(2).unwrap(),
                zone: HitZone::from_len(1).unwrap(),
                outcome: AttackOutcome::Point,
                complex: Complex::FromReception,
            }),
            point(true, 3, 1),
            point(false, 4, 2),
        ];

        let mut all = Stats::default();
        all.record_all(&events);

        let (left, right) = events.split_at(3);
        let mut a = Stats::default();
        a.record_all(left);
        let mut b = Stats::default();
        b.record_all(right);

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b;
        ba.merge(&a);

        assert_eq!(ab, all);
        assert_eq!(ba, all);
        assert_eq!(all.attacks.outcomes(2), [1, 0, 0, 0, 0]);
        assert_eq!(all.receptions.outcomes(9), [1, 0, 0, 0]);
    }
}
