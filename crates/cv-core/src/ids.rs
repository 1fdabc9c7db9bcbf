//! Table numbers wrapped in newtypes, plus names for the rooms, items and
//! motions the rules refer to directly.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u16);

        impl $name {
            /// The raw table number.
            pub fn get(self) -> u16 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Number of a room in the cave. Room numbers are dense and start at 1.
    LocationId
);
numeric_id!(
    /// Number of a portable or fixed item.
    ItemId
);
numeric_id!(
    /// Number of a block in the message bank.
    MessageId
);
numeric_id!(
    /// Code carried by motion words and matched against travel edges.
    MotionCode
);

impl LocationId {
    /// End of the road, where every game begins.
    pub const START: Self = Self(1);
    /// Inside the well house.
    pub const WELL_HOUSE: Self = Self(3);
    /// Outside the grate.
    pub const OUTSIDE_GRATE: Self = Self(8);
    /// Below the grate.
    pub const BELOW_GRATE: Self = Self(9);
    /// The bird chamber.
    pub const BIRD_CHAMBER: Self = Self(13);
    /// The hall of mists. Arriving here wakes the dwarves.
    pub const HALL_OF_MISTS: Self = Self(15);
    /// Hall of the mountain king, guarded by the snake.
    pub const MOUNTAIN_KING: Self = Self(19);
    /// Sentinel room: arriving here ends the game.
    pub const GAME_OVER: Self = Self(26);
    /// The Y2 room, where a hollow voice is sometimes heard.
    pub const Y2: Self = Self(33);
    /// Highest room number that still counts as near the surface.
    pub const SURFACE_LIMIT: Self = Self(7);
    /// Highest room number dwarves will not follow the player past.
    pub const DWARF_FRONTIER: Self = Self(14);

    /// Whether `self` lies in the inclusive range `lo..=hi`.
    pub fn within(self, lo: u16, hi: u16) -> bool {
        (lo..=hi).contains(&self.0)
    }
}

impl ItemId {
    /// Set of keys.
    pub const KEYS: Self = Self(1);
    /// Brass lantern.
    pub const LAMP: Self = Self(2);
    /// The grate, seen from above.
    pub const GRATE: Self = Self(3);
    /// Wicker cage.
    pub const CAGE: Self = Self(4);
    /// Black rod.
    pub const ROD: Self = Self(5);
    /// Rough stone steps leading down.
    pub const STEPS_DOWN: Self = Self(6);
    /// Little bird.
    pub const BIRD: Self = Self(7);
    /// The grate, seen from below.
    pub const GRATE_UNDERSIDE: Self = Self(8);
    /// Rough stone steps leading up.
    pub const STEPS_UP: Self = Self(9);
    /// Large gold nugget.
    pub const NUGGET: Self = Self(10);
    /// Green snake.
    pub const SNAKE: Self = Self(11);
    /// The fissure, bridged once struck.
    pub const FISSURE: Self = Self(12);
    /// Diamonds.
    pub const DIAMONDS: Self = Self(13);
    /// Silver bars.
    pub const SILVER: Self = Self(14);
    /// Jewelry.
    pub const JEWELRY: Self = Self(15);
    /// Rare coins.
    pub const COINS: Self = Self(16);
    /// The dwarf. Never placed; resolvable while a dwarf is present.
    pub const DWARF: Self = Self(17);
    /// The dwarf's knife. Never placed.
    pub const KNIFE: Self = Self(18);
    /// Tasty food.
    pub const FOOD: Self = Self(19);
    /// Bottle of water.
    pub const WATER: Self = Self(20);
    /// The dwarf's axe, dropped at the first ambush.
    pub const AXE: Self = Self(21);
}

impl MotionCode {
    /// Wildcard: an edge carrying this code matches any motion.
    pub const ANY: Self = Self(1);
    /// Return to the previous room.
    pub const BACK: Self = Self(8);
    /// The XYZZY incantation.
    pub const XYZZY: Self = Self(48);
    /// Into the depression outside the grate.
    pub const DEPRESSION: Self = Self(49);
    /// Toward the entrance from below the grate.
    pub const ENTRANCE: Self = Self(50);
    /// Re-describe the current room in full.
    pub const LOOK: Self = Self(57);
    /// Ask where the cave is.
    pub const CAVE: Self = Self(67);
}
