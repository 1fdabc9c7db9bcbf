//! Dwarf movement and knife fights.
//!
//! The pack wakes when the player first reaches the hall of mists, ambushes
//! once at random, then walks a fixed path. A dwarf that meets the player
//! below the surface keeps following and throws knives every turn it stays.

use cv_core::{DWARF_COUNT, DwarfPack, DwarfPhase, DwarfStatus, LocationId};
use tracing::debug;

use crate::rng::RandomSource;

/// Percent chance per turn of the first ambush once the pack is armed.
pub const AMBUSH_CHANCE: u32 = 5;
/// Percent chance that a thrown knife hits.
pub const KNIFE_CHANCE: u32 = 10;
/// Percent chance of killing a dwarf when attacking it.
pub const DUEL_CHANCE: u32 = 40;

/// Path step counter right after the ambush.
const FIRST_TICK: u32 = 2;
/// Steps below this leave a dwarf where it is.
const PATH_START: u32 = 8;
/// Unseen dwarves past this step leave the game.
const PATH_END: u32 = 23;

/// Rooms along the shared dwarf path, indexed by `step - 8`.
const PATH: [Option<u16>; 16] = [
    None,
    Some(36),
    Some(28),
    Some(19),
    Some(30),
    Some(62),
    Some(60),
    Some(41),
    Some(27),
    Some(17),
    Some(15),
    Some(19),
    Some(28),
    Some(36),
    None,
    None,
];

/// Room on the dwarf path for a step, if any.
pub fn path_room(step: u32) -> Option<LocationId> {
    let index = step.checked_sub(PATH_START)?;
    PATH.get(index as usize).copied().flatten().map(LocationId)
}

/// What the dwarves did this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    /// Nothing the player notices.
    Quiet,
    /// A dwarf threw an axe and ran off. The axe lands in the room.
    Ambush,
    /// Dwarves are in the room.
    Threat {
        /// How many dwarves are present.
        present: u32,
        /// How many of them throw knives.
        attackers: u32,
        /// How many knives hit.
        hits: u32,
    },
}

impl Encounter {
    /// True if a knife found its mark.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Threat { hits, .. } if hits > 0)
    }
}

/// Move the dwarves for one arrival at `here`.
pub fn advance(pack: &mut DwarfPack, here: LocationId, rng: &mut dyn RandomSource) -> Encounter {
    match pack.phase {
        DwarfPhase::Dormant => {
            if here == LocationId::HALL_OF_MISTS {
                debug!("dwarves armed");
                pack.phase = DwarfPhase::Armed;
            }
            Encounter::Quiet
        }
        DwarfPhase::Armed => {
            if !rng.chance(AMBUSH_CHANCE) {
                return Encounter::Quiet;
            }
            pack.phase = DwarfPhase::Active { tick: FIRST_TICK };
            pack.dwarves = Default::default();
            debug!(room = %here, "dwarf ambush");
            Encounter::Ambush
        }
        DwarfPhase::Active { tick } => {
            let tick = tick + 1;
            pack.phase = DwarfPhase::Active { tick };
            march(pack, tick, here, rng)
        }
    }
}

fn march(
    pack: &mut DwarfPack,
    tick: u32,
    here: LocationId,
    rng: &mut dyn RandomSource,
) -> Encounter {
    let mut present = 0;
    let mut attackers = 0;
    let mut hits = 0;
    for (i, dwarf) in pack.dwarves.iter_mut().enumerate() {
        let step = 2 * (i as u32 + 1) + tick;
        if dwarf.status == DwarfStatus::Removed || step < PATH_START {
            continue;
        }
        if step > PATH_END && !dwarf.is_seen() {
            dwarf.remove();
            continue;
        }
        dwarf.previous = dwarf.location;
        let follows = dwarf.is_seen() && !here.within(1, LocationId::DWARF_FRONTIER.get());
        if !follows {
            dwarf.location = path_room(step);
            dwarf.status = DwarfStatus::Roaming;
            if dwarf.location != Some(here) && dwarf.previous != Some(here) {
                continue;
            }
        }
        dwarf.status = DwarfStatus::Engaged;
        dwarf.location = Some(here);
        present += 1;
        if dwarf.previous == dwarf.location {
            attackers += 1;
            if rng.chance(KNIFE_CHANCE) {
                hits += 1;
            }
        }
    }
    if present == 0 {
        Encounter::Quiet
    } else {
        Encounter::Threat {
            present,
            attackers,
            hits,
        }
    }
}

/// Outcome of attacking a dwarf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duel {
    /// No dwarf to fight.
    NoDwarf,
    /// The dwarf is dead and gone.
    Killed,
    /// The dwarf dodged.
    Dodged,
}

/// Attack the first dwarf in the room with the player.
pub fn duel(pack: &mut DwarfPack, rng: &mut dyn RandomSource) -> Duel {
    let Some(index) = pack.first_seen() else {
        return Duel::NoDwarf;
    };
    if rng.chance(DUEL_CHANCE) {
        pack.dwarves[index].remove();
        debug!(dwarf = index, left = remaining(pack), "dwarf killed");
        Duel::Killed
    } else {
        Duel::Dodged
    }
}

/// Number of dwarves still in play.
pub fn remaining(pack: &DwarfPack) -> usize {
    DWARF_COUNT
        - pack
            .dwarves
            .iter()
            .filter(|d| d.status == DwarfStatus::Removed)
            .count()
}
