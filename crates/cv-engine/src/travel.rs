//! Resolving motion words against a room's exits.

use cv_core::{ForcedSequence, Fork, LocationId, MessageId, MotionCode, TravelEdge, WorldState};

use crate::rng::RandomSource;
use crate::verb::Verb;

/// Where a forced sequence put the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// Arrive at this room.
    Room(LocationId),
    /// Crawled around and ended up at this room.
    Crawled(LocationId),
    /// The player died on the way.
    Fatal,
}

/// Message given after crawling around without getting anywhere.
pub const CRAWLED_AROUND: MessageId = MessageId(56);

/// First exit that accepts `motion`, in table order.
pub fn find_edge(edges: &[TravelEdge], motion: MotionCode) -> Option<&TravelEdge> {
    edges.iter().find(|edge| edge.accepts(motion))
}

/// The message for a motion that matched no exit.
///
/// A pending TAKE means the player tried to pick up a direction.
pub fn failure_message(motion: MotionCode, verb: Option<Verb>) -> MessageId {
    if motion == MotionCode::XYZZY {
        return MessageId(42);
    }
    if motion == MotionCode(17) {
        return MessageId(80);
    }
    if verb == Some(Verb::Take) {
        return MessageId(59);
    }
    let raw = match motion.get() {
        11 | 19 => 11,
        7 | 8 | 36 | 37 | 68 => 10,
        29 | 30 | 43..=46 => 9,
        _ => 12,
    };
    MessageId(raw)
}

fn pick(fork: Fork, rng: &mut dyn RandomSource) -> LocationId {
    match fork {
        Fork::To(room) => room,
        Fork::Chance { percent, hit, miss } => {
            if rng.chance(u32::from(percent)) {
                hit
            } else {
                miss
            }
        }
    }
}

/// Decide where a forced sequence leads right now.
pub fn resolve_sequence(
    seq: ForcedSequence,
    state: &WorldState,
    rng: &mut dyn RandomSource,
) -> SequenceOutcome {
    match seq {
        ForcedSequence::Random(fork) => SequenceOutcome::Room(pick(fork, rng)),
        ForcedSequence::PropertyGate { item, open, closed } => {
            SequenceOutcome::Room(if state.prop(item) != 0 { open } else { closed })
        }
        ForcedSequence::CarryGate {
            item,
            carrying,
            otherwise,
        } => SequenceOutcome::Room(if state.is_carried(item) {
            carrying
        } else {
            otherwise
        }),
        ForcedSequence::Crawl {
            percent,
            found,
            back,
        } => {
            if rng.chance(u32::from(percent)) {
                SequenceOutcome::Room(pick(found, rng))
            } else {
                SequenceOutcome::Crawled(back)
            }
        }
        ForcedSequence::Fatal => SequenceOutcome::Fatal,
    }
}

#[cfg(test)]
mod tests {
    use cv_core::{Destination, Holder, ItemDef, ItemId, WorldData};

    use super::*;
    use crate::rng::{FixedSource, ScriptedSource};

    fn state() -> WorldState {
        let mut world = WorldData::new();
        for room in [3, 8, 15] {
            world.location_entry(LocationId(room));
        }
        for (id, room) in [(ItemId::GRATE, 8), (ItemId::NUGGET, 15)] {
            world
                .add_item(ItemDef {
                    id,
                    initial: Holder::Room(LocationId(room)),
                    fixed: false,
                })
                .unwrap();
        }
        WorldState::new(&world)
    }

    fn seq(code: u16) -> ForcedSequence {
        ForcedSequence::from_code(code).unwrap()
    }

    #[test]
    fn wildcard_edge_catches_everything_after_it() {
        let edges = vec![
            TravelEdge {
                destination: Destination::Room(LocationId(2)),
                motions: vec![MotionCode(44)],
            },
            TravelEdge {
                destination: Destination::Room(LocationId(3)),
                motions: vec![MotionCode::ANY],
            },
        ];
        let west = find_edge(&edges, MotionCode(44)).unwrap();
        assert_eq!(west.destination, Destination::Room(LocationId(2)));
        let other = find_edge(&edges, MotionCode(45)).unwrap();
        assert_eq!(other.destination, Destination::Room(LocationId(3)));
        assert!(find_edge(&edges[..1], MotionCode(45)).is_none());
    }

    #[test]
    fn failure_messages_by_motion() {
        assert_eq!(failure_message(MotionCode(44), None), MessageId(9));
        assert_eq!(failure_message(MotionCode(30), None), MessageId(9));
        assert_eq!(failure_message(MotionCode(7), None), MessageId(10));
        assert_eq!(failure_message(MotionCode(19), None), MessageId(11));
        assert_eq!(failure_message(MotionCode(2), None), MessageId(12));
        assert_eq!(failure_message(MotionCode(44), Some(Verb::Take)), MessageId(59));
        assert_eq!(failure_message(MotionCode::XYZZY, Some(Verb::Take)), MessageId(42));
        assert_eq!(failure_message(MotionCode(17), None), MessageId(80));
    }

    #[test]
    fn grate_gate_follows_its_state() {
        let mut state = state();
        let mut rng = FixedSource::new(1);
        assert_eq!(
            resolve_sequence(seq(301), &state, &mut rng),
            SequenceOutcome::Room(LocationId(23))
        );
        state.set_prop(ItemId::GRATE, 1).unwrap();
        assert_eq!(
            resolve_sequence(seq(301), &state, &mut rng),
            SequenceOutcome::Room(LocationId::BELOW_GRATE)
        );
        assert_eq!(
            resolve_sequence(seq(310), &state, &mut rng),
            SequenceOutcome::Room(LocationId::OUTSIDE_GRATE)
        );
    }

    #[test]
    fn nugget_is_too_heavy_for_the_steps() {
        let mut state = state();
        let mut rng = FixedSource::new(1);
        assert_eq!(
            resolve_sequence(seq(303), &state, &mut rng),
            SequenceOutcome::Room(LocationId(15))
        );
        state.move_item(ItemId::NUGGET, Holder::Carried).unwrap();
        assert_eq!(
            resolve_sequence(seq(303), &state, &mut rng),
            SequenceOutcome::Room(LocationId(20))
        );
    }

    #[test]
    fn coin_flip_uses_one_roll() {
        let state = state();
        assert_eq!(
            resolve_sequence(seq(300), &state, &mut FixedSource::new(100)),
            SequenceOutcome::Room(LocationId(5))
        );
        assert_eq!(
            resolve_sequence(seq(300), &state, &mut FixedSource::new(1)),
            SequenceOutcome::Room(LocationId(6))
        );
    }

    #[test]
    fn crawl_either_gets_through_or_goes_back() {
        let state = state();
        assert_eq!(
            resolve_sequence(seq(313), &state, &mut FixedSource::new(1)),
            SequenceOutcome::Crawled(LocationId(66))
        );
        let mut rng = ScriptedSource::new([100, 1], 1);
        assert_eq!(
            resolve_sequence(seq(313), &state, &mut rng),
            SequenceOutcome::Room(LocationId(71))
        );
        assert_eq!(
            resolve_sequence(seq(311), &state, &mut FixedSource::new(100)),
            SequenceOutcome::Room(LocationId(68))
        );
    }

    #[test]
    fn fatal_sequence() {
        assert_eq!(
            resolve_sequence(seq(305), &state(), &mut FixedSource::new(50)),
            SequenceOutcome::Fatal
        );
    }
}
