//! Lighting and the darkness hazard.

use cv_core::{ItemId, Location, MessageId, WorldState};

use crate::rng::RandomSource;

/// Percent chance of falling into a pit when moving in the dark.
pub const FALL_CHANCE: u32 = 25;

/// Message for falling into a pit in the dark.
pub const MSG_FELL: MessageId = MessageId(23);

/// Lamp state value meaning "on".
pub const LAMP_ON: u8 = 1;

/// True if the lamp is within reach and switched on.
pub fn lamp_is_lit(state: &WorldState) -> bool {
    state.is_reachable(ItemId::LAMP) && state.prop(ItemId::LAMP) == LAMP_ON
}

/// True if the player can see in `room`.
pub fn is_lit(room: &Location, state: &WorldState) -> bool {
    room.is_lit() || lamp_is_lit(state)
}

/// Roll for a fall when the player tries to move while in darkness.
pub fn falls_in_dark(dark: bool, rng: &mut dyn RandomSource) -> bool {
    dark && rng.chance(FALL_CHANCE)
}

#[cfg(test)]
mod tests {
    use cv_core::{Condition, Holder, ItemDef, LocationId, WorldData};

    use super::*;
    use crate::rng::FixedSource;

    fn world() -> WorldData {
        let mut world = WorldData::new();
        world.location_entry(LocationId(3));
        world.location_entry(LocationId(11));
        world
            .add_item(ItemDef {
                id: ItemId::LAMP,
                initial: Holder::Room(LocationId(3)),
                fixed: false,
            })
            .unwrap();
        world
    }

    fn dark_room() -> Location {
        Location {
            condition: Condition::Dark,
            ..Location::default()
        }
    }

    #[test]
    fn lit_room_needs_no_lamp() {
        let world = world();
        let state = WorldState::new(&world);
        let room = Location {
            condition: Condition::Lit,
            ..Location::default()
        };
        assert!(is_lit(&room, &state));
    }

    #[test]
    fn dark_room_needs_a_lit_lamp_in_reach() {
        let world = world();
        let mut state = WorldState::new(&world);
        state.location = LocationId(11);
        assert!(!is_lit(&dark_room(), &state));

        state.move_item(ItemId::LAMP, Holder::Carried).unwrap();
        assert!(!is_lit(&dark_room(), &state));

        state.set_prop(ItemId::LAMP, LAMP_ON).unwrap();
        assert!(is_lit(&dark_room(), &state));

        state
            .move_item(ItemId::LAMP, Holder::Room(LocationId(3)))
            .unwrap();
        assert!(!is_lit(&dark_room(), &state));
    }

    #[test]
    fn falling_needs_darkness_and_bad_luck() {
        assert!(falls_in_dark(true, &mut FixedSource::new(100)));
        assert!(!falls_in_dark(true, &mut FixedSource::new(1)));
        assert!(!falls_in_dark(false, &mut FixedSource::new(100)));
    }
}
