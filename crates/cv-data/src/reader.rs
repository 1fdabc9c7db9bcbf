//! Line reader that keeps the byte span of every line for diagnostics.

use std::ops::Range;

use crate::error::{DataError, DataResult};

/// One non-blank line of the data file and where it sits.
#[derive(Debug, Clone)]
pub(crate) struct Line<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

impl<'a> Line<'a> {
    fn bad_number(&self, found: &str) -> DataError {
        DataError::BadNumber {
            span: self.span.clone(),
            found: found.to_string(),
        }
    }

    /// Split off the leading integer key, returning it and the rest of the
    /// line with surrounding whitespace removed.
    pub fn split_key(&self) -> DataResult<(i64, &'a str)> {
        let trimmed = self.text.trim_start();
        let end = trimmed
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
            .map_or(trimmed.len(), |(i, _)| i);
        let (digits, rest) = trimmed.split_at(end);
        let key = digits.parse::<i64>().map_err(|_| {
            let word = trimmed.split_whitespace().next().unwrap_or_default();
            self.bad_number(word)
        })?;
        Ok((key, rest.trim()))
    }

    /// Every whitespace-separated field, parsed as an integer.
    pub fn numbers(&self) -> DataResult<Vec<i64>> {
        self.text
            .split_whitespace()
            .map(|field| field.parse::<i64>().map_err(|_| self.bad_number(field)))
            .collect()
    }
}

/// Walks the data file line by line, skipping blank lines.
#[derive(Debug)]
pub(crate) struct Reader<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn next_line(&mut self) -> Option<Line<'a>> {
        while self.pos < self.source.len() {
            let start = self.pos;
            let rest = &self.source[start..];
            let (raw, advance) = match rest.find('\n') {
                Some(i) => (&rest[..i], i + 1),
                None => (rest, rest.len()),
            };
            self.pos += advance;
            let text = raw.trim_end();
            if !text.trim_start().is_empty() {
                return Some(Line {
                    text,
                    span: start..start + text.len(),
                });
            }
        }
        None
    }

    /// The next line, or an error if the input has run out.
    pub fn expect_line(&mut self) -> DataResult<Line<'a>> {
        let end = self.source.len();
        self.next_line().ok_or(DataError::UnexpectedEof {
            span: end.saturating_sub(1)..end,
        })
    }
}
