//! The dwarves as data: where each one is, where it came from and whether
//! the player has met it. The rules that move them live in the engine.

use serde::{Deserialize, Serialize};

use crate::ids::LocationId;

/// Number of dwarves roaming the cave.
pub const DWARF_COUNT: usize = 3;

/// Where the pack as a whole stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DwarfPhase {
    /// The player has not yet reached the hall of mists.
    #[default]
    Dormant,
    /// Waiting for the first ambush.
    Armed,
    /// Roaming. `tick` counts turns since the ambush, starting at 2.
    Active {
        /// Turn counter driving each dwarf along its path.
        tick: u32,
    },
}

/// What a single dwarf is doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DwarfStatus {
    /// Not yet on its path.
    #[default]
    Dormant,
    /// Walking its fixed path, unseen.
    Roaming,
    /// In the room with the player, and following them.
    Engaged,
    /// Killed or wandered off for good.
    Removed,
}

/// One dwarf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dwarf {
    /// Current room, if it is anywhere on the map.
    pub location: Option<LocationId>,
    /// Room it stood in last turn.
    pub previous: Option<LocationId>,
    /// What it is doing.
    pub status: DwarfStatus,
}

impl Dwarf {
    /// True once the player has seen the dwarf and it is still around.
    pub fn is_seen(&self) -> bool {
        self.status == DwarfStatus::Engaged
    }

    /// Take the dwarf out of play permanently.
    pub fn remove(&mut self) {
        *self = Self {
            location: None,
            previous: None,
            status: DwarfStatus::Removed,
        };
    }
}

/// The dwarves and the phase they share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DwarfPack {
    /// Shared phase.
    pub phase: DwarfPhase,
    /// Individual dwarves, in the order they move.
    pub dwarves: [Dwarf; DWARF_COUNT],
}

impl DwarfPack {
    /// Index of the first dwarf the player can see, if any.
    pub fn first_seen(&self) -> Option<usize> {
        self.dwarves.iter().position(Dwarf::is_seen)
    }

    /// True if any dwarf is in the room with the player.
    pub fn any_seen(&self) -> bool {
        self.first_seen().is_some()
    }

    /// True if a seen dwarf came from `target`, so it stands in the way.
    pub fn blocks(&self, target: LocationId) -> bool {
        self.dwarves
            .iter()
            .any(|d| d.is_seen() && d.previous == Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pack_is_asleep() {
        let pack = DwarfPack::default();
        assert_eq!(pack.phase, DwarfPhase::Dormant);
        assert!(!pack.any_seen());
        assert!(!pack.blocks(LocationId(15)));
    }

    #[test]
    fn seen_dwarf_blocks_its_previous_room() {
        let mut pack = DwarfPack::default();
        pack.dwarves[1] = Dwarf {
            location: Some(LocationId(18)),
            previous: Some(LocationId(15)),
            status: DwarfStatus::Engaged,
        };
        assert_eq!(pack.first_seen(), Some(1));
        assert!(pack.blocks(LocationId(15)));
        assert!(!pack.blocks(LocationId(18)));

        pack.dwarves[1].remove();
        assert!(!pack.blocks(LocationId(15)));
        assert_eq!(pack.dwarves[1].status, DwarfStatus::Removed);
    }

    #[test]
    fn roaming_dwarf_does_not_block() {
        let mut pack = DwarfPack::default();
        pack.dwarves[0] = Dwarf {
            location: Some(LocationId(36)),
            previous: Some(LocationId(28)),
            status: DwarfStatus::Roaming,
        };
        assert!(!pack.blocks(LocationId(28)));
    }
}
