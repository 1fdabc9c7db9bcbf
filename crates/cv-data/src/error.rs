//! Load failures.

use std::ops::Range;
use std::path::PathBuf;

use cv_core::CvError;

use crate::diagnostics::Diagnostic;

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;

/// Fatal problems found while loading world data.
///
/// Every variant except [`DataError::Io`] and [`DataError::World`] carries
/// the byte span of the line that caused it.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The data stops before the closing `0` marker.
    #[error("world data ends before the closing section marker")]
    UnexpectedEof {
        /// Span at the end of the input.
        span: Range<usize>,
    },

    /// A field that should be a number is not.
    #[error("expected a number, found \"{found}\"")]
    BadNumber {
        /// The offending line.
        span: Range<usize>,
        /// What was there instead.
        found: String,
    },

    /// A section header names an unknown kind.
    #[error("unknown section kind {kind}")]
    UnknownSection {
        /// The header line.
        span: Range<usize>,
        /// The unknown kind.
        kind: i64,
    },

    /// A text record carries a key but no text.
    #[error("text record {key} has no text")]
    BlankText {
        /// The record line.
        span: Range<usize>,
        /// Its key.
        key: i64,
    },

    /// A key outside the range the table allows.
    #[error("key {key} is out of range for the {table} table")]
    KeyOutOfRange {
        /// The record line.
        span: Range<usize>,
        /// Which table.
        table: &'static str,
        /// The key.
        key: i64,
    },

    /// A table grew past its capacity.
    #[error("{table} table overflow: more than {limit} entries")]
    Overflow {
        /// The line that did not fit.
        span: Range<usize>,
        /// Which table.
        table: &'static str,
        /// Its capacity.
        limit: usize,
    },

    /// A vocabulary code whose class digit is not 0 to 3.
    #[error("vocabulary code {code} has no word class")]
    UnknownWordClass {
        /// The vocabulary line.
        span: Range<usize>,
        /// The packed code.
        code: i64,
    },

    /// A vocabulary line with no word after the code.
    #[error("vocabulary code {code} has no word")]
    MissingWord {
        /// The vocabulary line.
        span: Range<usize>,
        /// The packed code.
        code: i64,
    },

    /// A verb word whose code names no action.
    #[error("verb code {code} names no action")]
    UnknownVerb {
        /// The vocabulary line.
        span: Range<usize>,
        /// The verb code, without its class digit.
        code: u16,
    },

    /// A special word whose message is missing from the message bank.
    #[error("special word {word} prints message {code}, which has no text")]
    SilentWord {
        /// The vocabulary line.
        span: Range<usize>,
        /// The word.
        word: String,
        /// The message it should print.
        code: u16,
    },

    /// A travel destination at or past 300 that names no forced sequence.
    #[error("travel destination {code} is not a known forced sequence")]
    UnknownSequence {
        /// The travel row.
        span: Range<usize>,
        /// The destination code.
        code: i64,
    },

    /// A travel row with a destination but no motion words.
    #[error("travel row for room {room} lists no motion words")]
    EmptyTravelRow {
        /// The travel row.
        span: Range<usize>,
        /// The room owning the row.
        room: i64,
    },

    /// A travel row leads to a room the data never defines.
    #[error("travel from room {from} leads to unknown room {to}")]
    DanglingRoom {
        /// The travel row.
        span: Range<usize>,
        /// Room owning the row.
        from: u16,
        /// The missing room.
        to: u16,
    },

    /// The assembled world failed validation.
    #[error(transparent)]
    World(#[from] CvError),
}

impl DataError {
    /// Byte span of the offending line, when there is one.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::UnexpectedEof { span }
            | Self::BadNumber { span, .. }
            | Self::UnknownSection { span, .. }
            | Self::BlankText { span, .. }
            | Self::KeyOutOfRange { span, .. }
            | Self::Overflow { span, .. }
            | Self::UnknownWordClass { span, .. }
            | Self::MissingWord { span, .. }
            | Self::UnknownVerb { span, .. }
            | Self::SilentWord { span, .. }
            | Self::UnknownSequence { span, .. }
            | Self::EmptyTravelRow { span, .. }
            | Self::DanglingRoom { span, .. } => Some(span.clone()),
            Self::Io { .. } | Self::World(_) => None,
        }
    }

    /// Turn the error into a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.span().unwrap_or(0..0), self.to_string())
    }
}
