//! Two-word command recognition.
//!
//! The parser only folds and looks up words. Deciding whether a bare word
//! is a direction or an object, or what a verb applies to, is left to the
//! dispatcher.

use cv_core::{Token, VocabEntry, Vocabulary};

/// Characters of a typed word kept for echoing back.
pub const ECHO_WIDTH: usize = 10;

/// One word of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word as typed, upper-cased and cut to [`ECHO_WIDTH`], for echoing
    /// back.
    pub text: String,
    /// The folded comparison form.
    pub token: Token,
    /// The vocabulary row it matched, if any.
    pub entry: Option<VocabEntry>,
}

impl Word {
    fn recognize(raw: &str, vocab: &Vocabulary) -> Self {
        let token = Token::fold(raw);
        let entry = vocab.lookup(&token).cloned();
        Self {
            text: raw
                .chars()
                .take(ECHO_WIDTH)
                .map(|c| c.to_ascii_uppercase())
                .collect(),
            token,
            entry,
        }
    }

    /// True if the word folds to `token`.
    pub fn is(&self, token: &str) -> bool {
        self.token.as_str() == token
    }
}

/// The first two words of a line of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    /// The first word, absent for a blank line.
    pub first: Option<Word>,
    /// The second word, if one was given.
    pub second: Option<Word>,
}

/// Split a line into its first two words and look each one up.
///
/// Words after the second are ignored.
pub fn parse_line(input: &str, vocab: &Vocabulary) -> ParsedLine {
    let mut words = input
        .split_whitespace()
        .map(|raw| Word::recognize(raw, vocab));
    ParsedLine {
        first: words.next(),
        second: words.next(),
    }
}

/// Whether a line answers a yes/no question with yes. Only `NO` and `N`
/// count as no; anything else, including a blank line, is yes.
pub fn is_affirmative(input: &str) -> bool {
    let first = input
        .split_whitespace()
        .next()
        .map(Token::fold)
        .unwrap_or_else(|| Token::fold(""));
    !matches!(first.as_str(), "NO" | "N")
}

#[cfg(test)]
mod tests {
    use cv_core::WordClass;
    use proptest::prelude::*;

    use super::*;

    fn vocab() -> Vocabulary {
        let mut vocab = Vocabulary::new();
        for (word, raw) in [
            ("LAMP", 1002),
            ("LANTERN", 1002),
            ("TAKE", 2001),
            ("WEST", 44),
            ("HELP", 3051),
        ] {
            let (class, code) = WordClass::unpack(raw).unwrap();
            vocab.push(VocabEntry {
                token: Token::fold(word),
                class,
                code,
            });
        }
        vocab
    }

    #[test]
    fn parse_two_words() {
        let line = parse_line("take lamp", &vocab());
        assert!(line.second.is_some());
        let first = line.first.unwrap();
        assert_eq!(first.text, "TAKE");
        assert_eq!(first.entry.unwrap().class, WordClass::Verb);
        assert_eq!(line.second.unwrap().entry.unwrap().code, 2);
    }

    #[test]
    fn parse_single_word() {
        let line = parse_line("  West ", &vocab());
        assert!(line.second.is_none());
        assert!(line.first.unwrap().is("WEST"));
    }

    #[test]
    fn long_words_are_truncated() {
        let line = parse_line("lanterns", &vocab());
        let word = line.first.unwrap();
        assert_eq!(word.text, "LANTERNS");
        assert!(word.is("LANTE"));
        assert_eq!(word.entry.unwrap().code, 2);
    }

    #[test]
    fn echoed_text_is_cut_to_ten_characters() {
        let line = parse_line("supercalifragilistic", &vocab());
        let word = line.first.unwrap();
        assert_eq!(word.text, "SUPERCALIF");
        assert!(word.is("SUPER"));
    }

    #[test]
    fn extra_words_are_ignored() {
        let line = parse_line("take lamp now please", &vocab());
        assert_eq!(line.second.unwrap().text, "LAMP");
    }

    #[test]
    fn blank_and_unknown_lines() {
        let blank = parse_line("   ", &vocab());
        assert_eq!(blank, ParsedLine::default());

        let unknown = parse_line("frobozz xyzzz", &vocab());
        assert!(unknown.first.unwrap().entry.is_none());
        assert!(unknown.second.unwrap().entry.is_none());

        let half = parse_line("frobozz lamp", &vocab());
        assert!(half.second.unwrap().entry.is_some());
    }

    #[test]
    fn yes_no_answers() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative(""));
        assert!(is_affirmative("maybe"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("N"));
        assert!(!is_affirmative("no thanks"));
    }

    proptest! {
        #[test]
        fn case_does_not_matter(first in "[a-zA-Z]{1,10}", second in "[a-zA-Z]{1,10}") {
            let vocab = vocab();
            let lower = parse_line(&format!("{} {}", first.to_lowercase(), second.to_lowercase()), &vocab);
            let upper = parse_line(&format!("{} {}", first.to_uppercase(), second.to_uppercase()), &vocab);
            prop_assert_eq!(lower, upper);
        }

        #[test]
        fn at_most_two_words_are_kept(words in prop::collection::vec("[a-z]{1,8}", 0..6)) {
            let line = parse_line(&words.join(" "), &vocab());
            let kept = usize::from(line.first.is_some()) + usize::from(line.second.is_some());
            prop_assert_eq!(kept, words.len().min(2));
        }
    }
}
