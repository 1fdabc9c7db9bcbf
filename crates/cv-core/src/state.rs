//! The mutable half of a game.
//!
//! [`WorldState`] records where every item is, the state value of each
//! item, how often each room was visited, and where the player and the
//! dwarves are. Item holders live in an arena indexed by item number, with
//! a per-room list kept in step so each item has exactly one holder.

use std::collections::BTreeMap;

use crate::adversary::DwarfPack;
use crate::error::{CvError, CvResult};
use crate::ids::{ItemId, LocationId};
use crate::item::Holder;
use crate::world::WorldData;

/// Tracks which holder owns each item, and the order items are listed in.
///
/// Each holder keeps a chain: dropping an item puts it at the front of
/// the room's chain, so the most recent drop is listed first.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    holders: BTreeMap<ItemId, Holder>,
    chains: BTreeMap<Holder, Vec<ItemId>>,
    props: BTreeMap<ItemId, u8>,
}

impl ItemStore {
    /// Place every defined item at its starting holder, in number order.
    pub fn from_world(world: &WorldData) -> Self {
        let mut store = Self::default();
        for def in world.items() {
            store.holders.insert(def.id, def.initial);
            store.chains.entry(def.initial).or_default().push(def.id);
            store.props.insert(def.id, 0);
        }
        store
    }

    /// Current holder of an item.
    pub fn holder(&self, item: ItemId) -> Option<Holder> {
        self.holders.get(&item).copied()
    }

    /// Move an item to a new holder, at the front of its chain.
    pub fn move_to(&mut self, item: ItemId, to: Holder) -> CvResult<()> {
        let from = self.holder(item).ok_or(CvError::ItemNotFound(item))?;
        let chain = self
            .chains
            .get_mut(&from)
            .ok_or(CvError::OwnershipViolation(item))?;
        let pos = chain
            .iter()
            .position(|&i| i == item)
            .ok_or(CvError::OwnershipViolation(item))?;
        chain.remove(pos);
        self.chains.entry(to).or_default().insert(0, item);
        self.holders.insert(item, to);
        Ok(())
    }

    /// Items held by `holder`, in listing order.
    pub fn held_by(&self, holder: Holder) -> &[ItemId] {
        self.chains.get(&holder).map_or(&[], Vec::as_slice)
    }

    /// State value of an item. Unknown items read as 0.
    pub fn prop(&self, item: ItemId) -> u8 {
        self.props.get(&item).copied().unwrap_or(0)
    }

    /// Set the state value of an item.
    pub fn set_prop(&mut self, item: ItemId, value: u8) -> CvResult<()> {
        let slot = self
            .props
            .get_mut(&item)
            .ok_or(CvError::ItemNotFound(item))?;
        *slot = value;
        Ok(())
    }

    /// Verify that every item sits in exactly one chain, and that it is the
    /// chain of its recorded holder.
    pub fn check_ownership(&self) -> CvResult<()> {
        for (&item, holder) in &self.holders {
            let appearances: usize = self
                .chains
                .values()
                .map(|chain| chain.iter().filter(|&&i| i == item).count())
                .sum();
            let in_own_chain = self.held_by(*holder).contains(&item);
            if appearances != 1 || !in_own_chain {
                return Err(CvError::OwnershipViolation(item));
            }
        }
        Ok(())
    }
}

/// Everything about a game in progress: where the player is, where every
/// item is, and what the dwarves are doing.
#[derive(Debug, Clone)]
pub struct WorldState {
    /// The player's room.
    pub location: LocationId,
    /// The room the player came from, for BACK.
    pub previous: LocationId,
    /// Item placement and state values.
    pub items: ItemStore,
    visits: BTreeMap<LocationId, u8>,
    /// The dwarves.
    pub dwarves: DwarfPack,
}

/// Arrivals at a room before its long description is shown again.
pub const ABBREVIATION_CYCLE: u8 = 5;

impl WorldState {
    /// Fresh state for a new game: the player at the start, items at their
    /// starting holders, dwarves asleep.
    pub fn new(world: &WorldData) -> Self {
        Self {
            location: LocationId::START,
            previous: LocationId::START,
            items: ItemStore::from_world(world),
            visits: BTreeMap::new(),
            dwarves: DwarfPack::default(),
        }
    }

    /// Move an item to a new holder. The item goes to the front of the
    /// holder's chain.
    pub fn move_item(&mut self, item: ItemId, to: Holder) -> CvResult<()> {
        self.items.move_to(item, to)
    }

    /// State value of an item.
    pub fn prop(&self, item: ItemId) -> u8 {
        self.items.prop(item)
    }

    /// Set the state value of an item.
    pub fn set_prop(&mut self, item: ItemId, value: u8) -> CvResult<()> {
        self.items.set_prop(item, value)
    }

    /// Verify the single-holder invariant for every item.
    pub fn check_invariants(&self) -> CvResult<()> {
        self.items.check_ownership()
    }

    /// True if the player holds the item.
    pub fn is_carried(&self, item: ItemId) -> bool {
        self.items.holder(item) == Some(Holder::Carried)
    }

    /// True if the item lies in `room`.
    pub fn is_at(&self, item: ItemId, room: LocationId) -> bool {
        self.items.holder(item) == Some(Holder::Room(room))
    }

    /// True if the player can reach the item from the current room.
    pub fn is_reachable(&self, item: ItemId) -> bool {
        match self.items.holder(item) {
            Some(Holder::Room(room)) => room == self.location,
            Some(Holder::Carried | Holder::Anywhere) => true,
            Some(Holder::Nowhere) | None => false,
        }
    }

    /// Items lying in a room, in listing order.
    pub fn items_at(&self, room: LocationId) -> &[ItemId] {
        self.items.held_by(Holder::Room(room))
    }

    /// Items the player is carrying.
    pub fn inventory(&self) -> &[ItemId] {
        self.items.held_by(Holder::Carried)
    }

    /// True if the next arrival at `room` should show the long description.
    pub fn wants_long_description(&self, room: LocationId) -> bool {
        self.visits.get(&room).copied().unwrap_or(0) == 0
    }

    /// Count an arrival. The counter wraps so the long description returns
    /// every [`ABBREVIATION_CYCLE`] visits.
    pub fn record_visit(&mut self, room: LocationId) {
        let count = self.visits.entry(room).or_insert(0);
        *count = (*count + 1) % ABBREVIATION_CYCLE;
    }

    /// Force the long description on the next arrival.
    pub fn forget_visit(&mut self, room: LocationId) {
        self.visits.insert(room, 0);
    }
}
