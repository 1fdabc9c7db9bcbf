//! Turn interpreter for the cavern adventure.
//!
//! A [`Session`] plays one game against a loaded [`cv_core::WorldData`]:
//! it reads two-word commands, moves the player through the travel table,
//! applies verbs to items, runs the dwarves and tracks light and darkness.
//! All chance events go through an injectable [`RandomSource`].

/// Dwarf movement and combat.
pub mod adversary;
/// Session settings.
pub mod config;
/// Error types for the interpreter.
pub mod error;
/// Lighting and the darkness hazard.
pub mod light;
/// Buffered output for a turn.
pub mod narration;
/// Two-word command recognition.
pub mod parser;
/// Percentile dice.
pub mod rng;
/// The game loop.
pub mod session;
/// Motion resolution and forced sequences.
pub mod travel;
/// Verb words and their stock replies.
pub mod verb;

pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use rng::{FixedSource, RandomSource, ScriptedSource, SeededSource};
pub use session::{Hint, Phase, PlayerState, Session, TurnContext};
pub use verb::Verb;
