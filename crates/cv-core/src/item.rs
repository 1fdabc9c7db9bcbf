//! Item definitions and what an item looks like in each of its states.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, LocationId};
use crate::text::TextBlock;

/// Who or what currently holds an item.
///
/// Every item is held by exactly one holder at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holder {
    /// Lying in a room.
    Room(LocationId),
    /// In the player's hands.
    Carried,
    /// Reachable from every room.
    Anywhere,
    /// Out of play.
    Nowhere,
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room(loc) => write!(f, "room {loc}"),
            Self::Carried => f.write_str("carried"),
            Self::Anywhere => f.write_str("anywhere"),
            Self::Nowhere => f.write_str("nowhere"),
        }
    }
}

/// Static facts about an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    /// The item's number.
    pub id: ItemId,
    /// Where the item starts the game.
    pub initial: Holder,
    /// Fixed items cannot be picked up.
    pub fixed: bool,
}

/// How an item looks when it is listed in a room, per state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAppearance {
    /// Text for one specific state value.
    pub by_state: BTreeMap<u8, TextBlock>,
    /// Text used whatever the state.
    pub any_state: Option<TextBlock>,
}

impl ItemAppearance {
    /// The text for `state`, falling back to the any-state text.
    pub fn for_state(&self, state: u8) -> Option<&TextBlock> {
        self.by_state.get(&state).or(self.any_state.as_ref())
    }
}
