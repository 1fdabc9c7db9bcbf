//! Forced sequences: travel destinations that pick a room by chance or by
//! looking at the state of the world.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, LocationId};

/// Travel table destinations at or above this value name a forced
/// sequence instead of a room.
pub const SEQUENCE_BASE: u16 = 300;

/// A destination that may be left to chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fork {
    /// Always this room.
    To(LocationId),
    /// `hit` with the given percent chance, otherwise `miss`.
    Chance {
        /// Percent chance of taking `hit`.
        percent: u8,
        /// Room reached when the chance fires.
        hit: LocationId,
        /// Room reached otherwise.
        miss: LocationId,
    },
}

/// A travel destination whose outcome depends on chance or world state.
///
/// Travel rows name these with codes 300 to 314; [`ForcedSequence::from_code`]
/// turns a code into the rule it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForcedSequence {
    /// Pure chance.
    Random(Fork),
    /// `open` if the item's state is non-zero, else `closed`.
    PropertyGate {
        /// Item whose state decides the way.
        item: ItemId,
        /// Room reached while the state is non-zero.
        open: LocationId,
        /// Room reached while the state is zero.
        closed: LocationId,
    },
    /// `carrying` if the player holds the item, else `otherwise`.
    CarryGate {
        /// Item that decides the way.
        item: ItemId,
        /// Room reached while the item is carried.
        carrying: LocationId,
        /// Room reached while it is not.
        otherwise: LocationId,
    },
    /// A crawl that only sometimes gets anywhere. On a miss the player
    /// ends up at `back` after being told they crawled around.
    Crawl {
        /// Percent chance of getting through.
        percent: u8,
        /// Where getting through leads.
        found: Fork,
        /// Where the player ends up otherwise.
        back: LocationId,
    },
    /// The player dies.
    Fatal,
}

const fn room(n: u16) -> LocationId {
    LocationId(n)
}

impl ForcedSequence {
    /// Decode a travel destination code. Returns `None` for codes below
    /// [`SEQUENCE_BASE`] or past the last known sequence.
    pub fn from_code(code: u16) -> Option<Self> {
        let gate = |item, open, closed| Self::PropertyGate {
            item,
            open: room(open),
            closed: room(closed),
        };
        let carry = |carrying, otherwise| Self::CarryGate {
            item: ItemId::NUGGET,
            carrying: room(carrying),
            otherwise: room(otherwise),
        };
        Some(match code {
            300 => Self::Random(Fork::Chance {
                percent: 50,
                hit: room(5),
                miss: room(6),
            }),
            301 => gate(ItemId::GRATE, 9, 23),
            302 => gate(ItemId::GRATE, 8, 25),
            303 => carry(20, 15),
            304 => carry(22, 14),
            305 => Self::Fatal,
            306 => gate(ItemId::FISSURE, 27, 31),
            307 => gate(ItemId::SNAKE, 28, 32),
            308 => gate(ItemId::SNAKE, 29, 32),
            309 => gate(ItemId::SNAKE, 30, 32),
            310 => gate(ItemId::GRATE, 8, 9),
            311 => Self::Crawl {
                percent: 20,
                found: Fork::To(room(68)),
                back: room(65),
            },
            312 => Self::Crawl {
                percent: 20,
                found: Fork::Chance {
                    percent: 50,
                    hit: room(70),
                    miss: room(39),
                },
                back: room(65),
            },
            313 => Self::Crawl {
                percent: 40,
                found: Fork::Chance {
                    percent: 75,
                    hit: room(72),
                    miss: room(71),
                },
                back: room(66),
            },
            314 => Self::Crawl {
                percent: 20,
                found: Fork::To(room(77)),
                back: room(66),
            },
            _ => return None,
        })
    }

    /// Every room this sequence can lead to.
    pub fn rooms(&self) -> Vec<LocationId> {
        fn fork_rooms(fork: &Fork) -> Vec<LocationId> {
            match *fork {
                Fork::To(to) => vec![to],
                Fork::Chance { hit, miss, .. } => vec![hit, miss],
            }
        }
        match self {
            Self::Random(fork) => fork_rooms(fork),
            Self::PropertyGate { open, closed, .. } => vec![*open, *closed],
            Self::CarryGate {
                carrying,
                otherwise,
                ..
            } => vec![*carrying, *otherwise],
            Self::Crawl { found, back, .. } => {
                let mut rooms = fork_rooms(found);
                rooms.push(*back);
                rooms
            }
            Self::Fatal => Vec::new(),
        }
    }
}
