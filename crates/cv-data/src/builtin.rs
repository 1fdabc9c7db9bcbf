//! Companion tables that the record file does not carry: room conditions
//! and where each item starts.

use cv_core::{Condition, CvResult, Holder, ItemDef, ItemId, LocationId, WorldData};

/// Rooms lit without a lamp.
const LIT_ROOMS: std::ops::RangeInclusive<u16> = 1..=10;

/// Rooms the player is carried straight through.
const FORCED_ROOMS: [u16; 11] = [16, 20, 21, 22, 23, 24, 25, 26, 31, 32, 79];

/// Item number, starting room (0 for out of play) and whether it is fixed.
const ITEMS: [(u16, u16, bool); 21] = [
    (1, 3, false),
    (2, 3, false),
    (3, 8, true),
    (4, 10, false),
    (5, 11, false),
    (6, 14, true),
    (7, 13, false),
    (8, 9, true),
    (9, 15, true),
    (10, 18, false),
    (11, 19, true),
    (12, 17, true),
    (13, 27, false),
    (14, 28, false),
    (15, 29, false),
    (16, 30, false),
    (17, 0, false),
    (18, 0, false),
    (19, 3, false),
    (20, 3, false),
    (21, 0, false),
];

/// Apply room conditions and register every item.
pub(crate) fn install(world: &mut WorldData) -> CvResult<()> {
    for room in LIT_ROOMS {
        world.location_entry(LocationId(room)).condition = Condition::Lit;
    }
    for room in FORCED_ROOMS {
        world.location_entry(LocationId(room)).condition = Condition::Forced;
    }
    for (id, room, fixed) in ITEMS {
        let initial = match room {
            0 => Holder::Nowhere,
            r => Holder::Room(LocationId(r)),
        };
        world.add_item(ItemDef {
            id: ItemId(id),
            initial,
            fixed,
        })?;
    }
    Ok(())
}
