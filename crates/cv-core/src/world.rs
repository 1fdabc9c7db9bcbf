//! The static tables a game is played against.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CvError, CvResult};
use crate::ids::{ItemId, LocationId, MessageId};
use crate::item::{Holder, ItemAppearance, ItemDef};
use crate::location::{Destination, Location, TravelEdge};
use crate::text::TextBlock;
use crate::vocab::Vocabulary;

/// The immutable tables a game is played against: rooms and their exits,
/// vocabulary, item definitions and appearances, and the message bank.
///
/// Built once by the loader and shared read-only by every session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorldData {
    locations: BTreeMap<LocationId, Location>,
    vocabulary: Vocabulary,
    items: BTreeMap<ItemId, ItemDef>,
    appearances: BTreeMap<ItemId, ItemAppearance>,
    messages: BTreeMap<MessageId, TextBlock>,
}

impl WorldData {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Locations --

    /// Look up a room.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Look up a room, failing if it does not exist.
    pub fn require_location(&self, id: LocationId) -> CvResult<&Location> {
        self.location(id).ok_or(CvError::LocationNotFound(id))
    }

    /// The room with this number, created empty if it is not known yet.
    pub fn location_entry(&mut self, id: LocationId) -> &mut Location {
        self.locations.entry(id).or_default()
    }

    /// Append an exit to a room, creating the room if needed.
    pub fn add_edge(&mut self, from: LocationId, edge: TravelEdge) {
        self.location_entry(from).travel.push(edge);
    }

    /// Exits of a room in table order. Empty for unknown rooms.
    pub fn travel(&self, id: LocationId) -> &[TravelEdge] {
        self.location(id).map_or(&[], |loc| loc.travel.as_slice())
    }

    /// All rooms in number order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations.iter().map(|(id, loc)| (*id, loc))
    }

    /// Number of known rooms.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    // -- Vocabulary --

    /// The vocabulary table.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Mutable access for the loader.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    // -- Items --

    /// Register an item definition.
    pub fn add_item(&mut self, def: ItemDef) -> CvResult<()> {
        if self.items.contains_key(&def.id) {
            return Err(CvError::DuplicateItem(def.id));
        }
        self.items.insert(def.id, def);
        Ok(())
    }

    /// Look up an item definition.
    pub fn item(&self, id: ItemId) -> Option<&ItemDef> {
        self.items.get(&id)
    }

    /// All item definitions in number order.
    pub fn items(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values()
    }

    /// True if the item cannot be picked up.
    pub fn is_fixed(&self, id: ItemId) -> bool {
        self.item(id).is_some_and(|def| def.fixed)
    }

    /// Appearance table entry for an item, created empty if needed.
    pub fn appearance_entry(&mut self, id: ItemId) -> &mut ItemAppearance {
        self.appearances.entry(id).or_default()
    }

    /// How an item looks in a given state, if it is ever shown.
    pub fn item_appearance(&self, id: ItemId, state: u8) -> Option<&TextBlock> {
        self.appearances.get(&id).and_then(|a| a.for_state(state))
    }

    // -- Messages --

    /// Look up a bank message.
    pub fn message(&self, id: MessageId) -> Option<&TextBlock> {
        self.messages.get(&id)
    }

    /// The message with this number, created empty if needed.
    pub fn message_entry(&mut self, id: MessageId) -> &mut TextBlock {
        self.messages.entry(id).or_default()
    }

    /// Number of bank messages.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Check that every exit, including every outcome of a forced
    /// sequence, and every starting placement names a room that exists.
    pub fn validate(&self) -> CvResult<()> {
        for (from, loc) in &self.locations {
            for edge in &loc.travel {
                let targets = match edge.destination {
                    Destination::Room(to) => vec![to],
                    Destination::Sequence(seq) => seq.rooms(),
                };
                if let Some(to) = targets
                    .into_iter()
                    .find(|to| !self.locations.contains_key(to))
                {
                    return Err(CvError::DanglingDestination { from: *from, to });
                }
            }
        }
        for def in self.items.values() {
            if let Holder::Room(location) = def.initial {
                if !self.locations.contains_key(&location) {
                    return Err(CvError::DanglingPlacement {
                        item: def.id,
                        location,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::MotionCode;

    fn edge_to(dest: u16) -> TravelEdge {
        TravelEdge {
            destination: Destination::Room(LocationId(dest)),
            motions: vec![MotionCode(2)],
        }
    }

    #[test]
    fn edges_create_rooms() {
        let mut world = WorldData::new();
        world.add_edge(LocationId(1), edge_to(2));
        world.location_entry(LocationId(2));
        assert_eq!(world.travel(LocationId(1)).len(), 1);
        assert!(world.travel(LocationId(7)).is_empty());
        assert_eq!(world.location_count(), 2);
        world.validate().unwrap();
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let mut world = WorldData::new();
        world.add_edge(LocationId(1), edge_to(9));
        let err = world.validate().unwrap_err();
        assert!(matches!(
            err,
            CvError::DanglingDestination { to: LocationId(9), .. }
        ));
    }

    #[test]
    fn dangling_placement_is_rejected() {
        let mut world = WorldData::new();
        world
            .add_item(ItemDef {
                id: ItemId(1),
                initial: Holder::Room(LocationId(4)),
                fixed: false,
            })
            .unwrap();
        assert!(matches!(
            world.validate(),
            Err(CvError::DanglingPlacement { .. })
        ));
    }

    #[test]
    fn duplicate_item_is_rejected() {
        let mut world = WorldData::new();
        let def = ItemDef {
            id: ItemId(2),
            initial: Holder::Nowhere,
            fixed: false,
        };
        world.add_item(def.clone()).unwrap();
        assert!(matches!(
            world.add_item(def),
            Err(CvError::DuplicateItem(ItemId(2)))
        ));
    }

    #[test]
    fn missing_message_is_none() {
        let mut world = WorldData::new();
        world.message_entry(MessageId(54)).push_line("OK");
        assert_eq!(world.message(MessageId(54)).unwrap().headline(), Some("OK"));
        assert!(world.message(MessageId(55)).is_none());
    }

    #[test]
    fn serializes_to_json() {
        let mut world = WorldData::new();
        world.add_edge(LocationId(1), edge_to(1));
        let json = serde_json::to_string(&world).unwrap();
        assert!(json.contains("\"locations\""));
        assert!(json.contains("\"travel\""));
    }
}
