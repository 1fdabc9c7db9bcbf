//! World data for the cavern interpreter.
//!
//! Reads the numbered-section record format (long and short room texts,
//! travel rows, vocabulary, item texts and messages), attaches the
//! companion tables the records do not carry, and produces a validated
//! [`WorldData`]. Any integrity problem is fatal and reported as a
//! [`DataError`] pointing at the offending line.

mod builtin;
/// Diagnostics and their terminal rendering.
pub mod diagnostics;
/// Loader error types.
pub mod error;
mod loader;
mod reader;

use std::path::Path;

use cv_core::WorldData;

pub use diagnostics::{Diagnostic, Severity, render_diagnostics};
pub use error::{DataError, DataResult};
pub use loader::{MAX_TEXT_LINES, MAX_TRAVEL_ENTRIES, MAX_VOCABULARY};

/// File name of the built-in data set.
pub const DEFAULT_NAME: &str = "advdat.77-03-31";

/// The built-in data set.
pub const DEFAULT_SOURCE: &str = include_str!("../data/advdat.77-03-31");

/// A successfully loaded world and any warnings raised along the way.
#[derive(Debug)]
pub struct Loaded {
    /// The validated tables.
    pub data: WorldData,
    /// Non-fatal findings, such as exits no word can select.
    pub warnings: Vec<Diagnostic>,
}

/// Load world data from a string.
pub fn load_source(source: &str) -> DataResult<Loaded> {
    let parsed = loader::parse(source)?;
    let warnings = loader::lint(&parsed);
    tracing::debug!(
        rooms = parsed.world.location_count(),
        words = parsed.world.vocabulary().len(),
        messages = parsed.world.message_count(),
        warnings = warnings.len(),
        "world data loaded"
    );
    Ok(Loaded {
        data: parsed.world,
        warnings,
    })
}

/// Load the built-in data set.
pub fn load_default() -> DataResult<Loaded> {
    load_source(DEFAULT_SOURCE)
}

/// Read a data file from disk.
pub fn read_source(path: &Path) -> DataResult<String> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load world data from a file.
pub fn load_file(path: &Path) -> DataResult<Loaded> {
    load_source(&read_source(path)?)
}
