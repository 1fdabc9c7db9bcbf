use cv_core::TextBlock;

/// Output collected during a turn, drained once the turn is over.
#[derive(Debug, Clone, Default)]
pub struct Narration {
    lines: Vec<String>,
}

impl Narration {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text block followed by a blank separator line.
    pub fn block(&mut self, block: &TextBlock) {
        self.lines.extend(block.lines().iter().cloned());
        self.lines.push(String::new());
    }

    /// Append a single line with no separator.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// True if nothing has been written this turn.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take everything written so far as one string, one line per row.
    pub fn drain(&mut self) -> String {
        let mut out = String::new();
        for line in self.lines.drain(..) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
