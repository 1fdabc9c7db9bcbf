//! Word folding and the vocabulary table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of significant characters in a vocabulary word.
pub const TOKEN_WIDTH: usize = 5;

/// Verb codes run from 1 to this value. Each one names an action.
pub const VERB_COUNT: u16 = 16;

/// A word folded to the fixed comparison width: upper case, truncated to
/// [`TOKEN_WIDTH`] characters and right-padded with spaces.
///
/// `"lantern"` and `"LANTERNS"` both fold to `"LANTE"`, so they are the same
/// word as far as the game is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Fold raw input into a token.
    pub fn fold(word: &str) -> Self {
        let mut folded: String = word
            .chars()
            .take(TOKEN_WIDTH)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let width = folded.chars().count();
        folded.extend(std::iter::repeat_n(' ', TOKEN_WIDTH - width));
        Self(folded)
    }

    /// The padded form, always [`TOKEN_WIDTH`] characters long.
    pub fn as_padded(&self) -> &str {
        &self.0
    }

    /// The token without its padding.
    pub fn as_str(&self) -> &str {
        self.0.trim_end()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a recognized word does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    /// Moves the player along a travel edge.
    Motion,
    /// Names an item.
    Object,
    /// Names an action.
    Verb,
    /// Prints a canned message and does nothing else.
    Special,
}

impl WordClass {
    /// Split a packed vocabulary number (`class * 1000 + code`) into its
    /// class and code. Returns `None` for an unknown class digit.
    pub fn unpack(raw: u32) -> Option<(Self, u16)> {
        let class = match raw / 1000 {
            0 => Self::Motion,
            1 => Self::Object,
            2 => Self::Verb,
            3 => Self::Special,
            _ => return None,
        };
        Some((class, (raw % 1000) as u16))
    }

    /// Lower-case name used in listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Motion => "motion",
            Self::Object => "object",
            Self::Verb => "verb",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The folded word.
    pub token: Token,
    /// The word's class.
    pub class: WordClass,
    /// Class-specific code: a motion code, item number, verb number or
    /// message number.
    pub code: u16,
}

/// The vocabulary table, searched in insertion order.
///
/// When the same token appears twice the first row wins, so later rows
/// for a token are kept only for listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
    #[serde(skip)]
    first_by_token: HashMap<Token, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the table.
    pub fn push(&mut self, entry: VocabEntry) {
        let index = self.entries.len();
        self.first_by_token
            .entry(entry.token.clone())
            .or_insert(index);
        self.entries.push(entry);
    }

    /// Look up a folded token, returning the first matching row.
    pub fn lookup(&self, token: &Token) -> Option<&VocabEntry> {
        self.first_by_token
            .get(token)
            .and_then(|&index| self.entries.get(index))
    }

    /// Fold a raw word and look it up.
    pub fn lookup_word(&self, word: &str) -> Option<&VocabEntry> {
        self.lookup(&Token::fold(word))
    }

    /// Whether any motion word carries `code`.
    pub fn has_motion(&self, code: u16) -> bool {
        self.entries
            .iter()
            .any(|e| e.class == WordClass::Motion && e.code == code)
    }

    /// The first word that names `item`, for echoing back to the player.
    pub fn object_word(&self, item: u16) -> Option<&Token> {
        self.entries
            .iter()
            .find(|e| e.class == WordClass::Object && e.code == item)
            .map(|e| &e.token)
    }

    /// All rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = &VocabEntry> {
        self.entries.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
