//! Core types for the cavern interpreter: rooms and their exits, the
//! vocabulary, items, the message bank and the mutable state of a game.
//!
//! This crate knows nothing about the data file format or the rules of
//! play. The loader in `cv-data` fills a [`WorldData`], and the engine in
//! `cv-engine` plays a [`WorldState`] against it.

/// Dwarf state shared between the world state and the engine.
pub mod adversary;
/// Error types used throughout the crate.
pub mod error;
/// Numeric identifiers for rooms, items, messages and motions.
pub mod ids;
/// Item definitions, holders and appearances.
pub mod item;
/// Rooms, conditions and travel edges.
pub mod location;
/// Forced travel sequences.
pub mod sequence;
/// Mutable game state and the item store.
pub mod state;
/// Multi-line text blocks.
pub mod text;
/// Words, tokens and the vocabulary table.
pub mod vocab;
/// The immutable world tables.
pub mod world;

/// Re-export dwarf state.
pub use adversary::{DWARF_COUNT, Dwarf, DwarfPack, DwarfPhase, DwarfStatus};
/// Re-export error types.
pub use error::{CvError, CvResult};
/// Re-export identifiers.
pub use ids::{ItemId, LocationId, MessageId, MotionCode};
/// Re-export item types.
pub use item::{Holder, ItemAppearance, ItemDef};
/// Re-export location types.
pub use location::{Condition, Destination, Location, TravelEdge};
/// Re-export forced sequences.
pub use sequence::{Fork, ForcedSequence};
/// Re-export game state.
pub use state::{ItemStore, WorldState};
/// Re-export text blocks.
pub use text::TextBlock;
/// Re-export vocabulary types.
pub use vocab::{Token, VERB_COUNT, VocabEntry, Vocabulary, WordClass};
/// Re-export the world tables.
pub use world::WorldData;
