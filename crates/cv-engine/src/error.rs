//! Error types for the interpreter.

use cv_core::{CvError, LocationId};
use thiserror::Error;

/// Result type for interpreter operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that stop a turn from completing.
///
/// Anything the player types is answered in the narrative; these errors
/// only arise from inconsistent world data or misuse of the session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world model rejected an operation.
    #[error("world error: {0}")]
    World(#[from] CvError),

    /// A vocabulary verb code with no action behind it.
    #[error("verb code {0} has no action")]
    UnknownVerb(u16),

    /// Forced travel kept bouncing between rooms without settling.
    #[error("forced travel from {0} does not settle")]
    ForcedLoop(LocationId),

    /// Input arrived after the session ended.
    #[error("the session has ended")]
    Terminated,
}
