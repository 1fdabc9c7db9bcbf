//! Multi-line narration text.

use serde::{Deserialize, Serialize};

/// An ordered run of display lines sharing one table key.
///
/// Room descriptions, item appearances and bank messages are all stored
/// this way. Lines are kept exactly as written in the data file, minus
/// trailing whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    /// Create a block holding a single line.
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// Append a line to the end of the block.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The lines in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first line, if any. Used for one-line summaries.
    pub fn headline(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TextBlock {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_order() {
        let mut block = TextBlock::single("YOU ARE IN A MAZE");
        block.push_line("OF TWISTY PASSAGES.");
        assert_eq!(block.len(), 2);
        assert_eq!(block.headline(), Some("YOU ARE IN A MAZE"));
        assert_eq!(block.lines()[1], "OF TWISTY PASSAGES.");
    }

    #[test]
    fn collect_from_strs() {
        let block: TextBlock = ["A", "B"].into_iter().collect();
        assert_eq!(block.lines(), ["A", "B"]);
        assert!(!block.is_empty());
        assert!(TextBlock::default().is_empty());
    }
}
