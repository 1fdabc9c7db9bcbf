//! Section-by-section parsing of the record file and the checks run once
//! every section has been read.

use std::ops::Range;

use cv_core::sequence::SEQUENCE_BASE;
use cv_core::{
    Destination, ForcedSequence, ItemId, LocationId, MessageId, MotionCode, TextBlock, Token,
    TravelEdge, VERB_COUNT, VocabEntry, WordClass, WorldData,
};

use crate::builtin;
use crate::diagnostics::Diagnostic;
use crate::error::{DataError, DataResult};
use crate::reader::{Line, Reader};

/// Capacity of the shared text table, counted in lines across all text
/// sections.
pub const MAX_TEXT_LINES: usize = 1000;
/// Capacity of the travel table, counted in motion words.
pub const MAX_TRAVEL_ENTRIES: usize = 1000;
/// Capacity of the vocabulary table.
pub const MAX_VOCABULARY: usize = 1000;

/// Highest room number a record may name. Travel destinations from 300
/// up are forced sequences.
const MAX_LOCATION: i64 = SEQUENCE_BASE as i64 - 1;
/// Highest message number.
const MAX_MESSAGE: i64 = 300;

/// Which table a text section feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextKind {
    Long,
    Short,
    Item,
    Message,
}

/// The kinds of section a data file is made of, by header number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Text(TextKind),
    Travel,
    Vocabulary,
}

impl Section {
    fn from_header(kind: i64) -> Option<Self> {
        Some(match kind {
            1 => Self::Text(TextKind::Long),
            2 => Self::Text(TextKind::Short),
            3 => Self::Travel,
            4 => Self::Vocabulary,
            5 => Self::Text(TextKind::Item),
            6 => Self::Text(TextKind::Message),
            _ => return None,
        })
    }
}

/// A travel row, remembered with its span for the post-load checks.
#[derive(Debug, Clone)]
pub(crate) struct TravelRow {
    pub from: LocationId,
    pub span: Range<usize>,
    pub destination: Destination,
    pub motions: Vec<MotionCode>,
}

/// A vocabulary row, remembered with its span for the post-load checks.
#[derive(Debug, Clone)]
pub(crate) struct WordRow {
    pub span: Range<usize>,
    pub entry: VocabEntry,
}

/// Everything the loader produced: the world plus the rows it came from.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub world: WorldData,
    pub travel_rows: Vec<TravelRow>,
    pub word_rows: Vec<WordRow>,
}

#[derive(Debug)]
struct Loader<'a> {
    reader: Reader<'a>,
    world: WorldData,
    text_lines: usize,
    travel_entries: usize,
    travel_rows: Vec<TravelRow>,
    word_rows: Vec<WordRow>,
}

/// Parse a complete data file, attach the built-in tables and check that
/// every reference resolves.
pub(crate) fn parse(source: &str) -> DataResult<Parsed> {
    let mut parsed = parse_records(source)?;
    builtin::install(&mut parsed.world)?;
    check_destinations(&parsed)?;
    check_special_words(&parsed)?;
    parsed.world.validate()?;
    Ok(parsed)
}

/// Parse the record sections alone.
fn parse_records(source: &str) -> DataResult<Parsed> {
    let mut loader = Loader {
        reader: Reader::new(source),
        world: WorldData::new(),
        text_lines: 0,
        travel_entries: 0,
        travel_rows: Vec::new(),
        word_rows: Vec::new(),
    };

    loop {
        let header = loader.reader.expect_line()?;
        let (kind, _) = header.split_key()?;
        if kind == 0 {
            break;
        }
        let section = Section::from_header(kind).ok_or(DataError::UnknownSection {
            span: header.span.clone(),
            kind,
        })?;
        tracing::trace!(?section, "reading section");
        match section {
            Section::Text(kind) => loader.text_section(kind)?,
            Section::Travel => loader.travel_section()?,
            Section::Vocabulary => loader.vocabulary_section()?,
        }
    }

    Ok(Parsed {
        world: loader.world,
        travel_rows: loader.travel_rows,
        word_rows: loader.word_rows,
    })
}

fn out_of_range(line: &Line<'_>, table: &'static str, key: i64) -> DataError {
    DataError::KeyOutOfRange {
        span: line.span.clone(),
        table,
        key,
    }
}

fn as_room(line: &Line<'_>, key: i64) -> DataResult<LocationId> {
    if (1..=MAX_LOCATION).contains(&key) {
        Ok(LocationId(key as u16))
    } else {
        Err(out_of_range(line, "location", key))
    }
}

impl Loader<'_> {
    fn text_section(&mut self, kind: TextKind) -> DataResult<()> {
        loop {
            let line = self.reader.expect_line()?;
            let (key, text) = line.split_key()?;
            if key == -1 {
                return Ok(());
            }
            if text.is_empty() {
                return Err(DataError::BlankText {
                    span: line.span.clone(),
                    key,
                });
            }
            self.text_lines += 1;
            if self.text_lines > MAX_TEXT_LINES {
                return Err(DataError::Overflow {
                    span: line.span.clone(),
                    table: "text",
                    limit: MAX_TEXT_LINES,
                });
            }
            let block = self.text_block(kind, &line, key)?;
            block.push_line(text);
        }
    }

    /// The block a text record with `key` extends.
    fn text_block(
        &mut self,
        kind: TextKind,
        line: &Line<'_>,
        key: i64,
    ) -> DataResult<&mut TextBlock> {
        Ok(match kind {
            TextKind::Long => {
                let room = as_room(line, key)?;
                self.world
                    .location_entry(room)
                    .long
                    .get_or_insert_with(TextBlock::default)
            }
            TextKind::Short => {
                let room = as_room(line, key)?;
                self.world
                    .location_entry(room)
                    .short
                    .get_or_insert_with(TextBlock::default)
            }
            TextKind::Item => {
                let (item, state) = match key {
                    1..=199 => (key % 100, Some((key / 100) as u8)),
                    201..=299 => (key - 200, None),
                    _ => return Err(out_of_range(line, "item text", key)),
                };
                if item == 0 {
                    return Err(out_of_range(line, "item text", key));
                }
                let look = self.world.appearance_entry(ItemId(item as u16));
                match state {
                    Some(state) => look.by_state.entry(state).or_default(),
                    None => look.any_state.get_or_insert_with(TextBlock::default),
                }
            }
            TextKind::Message => {
                if !(1..=MAX_MESSAGE).contains(&key) {
                    return Err(out_of_range(line, "message", key));
                }
                self.world.message_entry(MessageId(key as u16))
            }
        })
    }

    fn travel_section(&mut self) -> DataResult<()> {
        loop {
            let line = self.reader.expect_line()?;
            let fields = line.numbers()?;
            let Some((&from, rest)) = fields.split_first() else {
                continue;
            };
            if from == -1 {
                return Ok(());
            }
            let from = as_room(&line, from)?;
            let Some((&dest, words)) = rest.split_first() else {
                return Err(DataError::EmptyTravelRow {
                    span: line.span.clone(),
                    room: i64::from(from.get()),
                });
            };
            if words.is_empty() {
                return Err(DataError::EmptyTravelRow {
                    span: line.span.clone(),
                    room: i64::from(from.get()),
                });
            }

            let destination = if dest >= i64::from(SEQUENCE_BASE) {
                let seq = u16::try_from(dest)
                    .ok()
                    .and_then(ForcedSequence::from_code)
                    .ok_or(DataError::UnknownSequence {
                        span: line.span.clone(),
                        code: dest,
                    })?;
                Destination::Sequence(seq)
            } else {
                Destination::Room(as_room(&line, dest)?)
            };

            let motions = words
                .iter()
                .map(|&w| {
                    if (1..1000).contains(&w) {
                        Ok(MotionCode(w as u16))
                    } else {
                        Err(out_of_range(&line, "motion", w))
                    }
                })
                .collect::<DataResult<Vec<_>>>()?;

            self.travel_entries += motions.len();
            if self.travel_entries > MAX_TRAVEL_ENTRIES {
                return Err(DataError::Overflow {
                    span: line.span.clone(),
                    table: "travel",
                    limit: MAX_TRAVEL_ENTRIES,
                });
            }

            self.world.add_edge(
                from,
                TravelEdge {
                    destination,
                    motions: motions.clone(),
                },
            );
            self.travel_rows.push(TravelRow {
                from,
                span: line.span.clone(),
                destination,
                motions,
            });
        }
    }

    fn vocabulary_section(&mut self) -> DataResult<()> {
        loop {
            let line = self.reader.expect_line()?;
            let (code, rest) = line.split_key()?;
            if code == -1 {
                return Ok(());
            }
            let Some(word) = rest.split_whitespace().next() else {
                return Err(DataError::MissingWord {
                    span: line.span.clone(),
                    code,
                });
            };
            let (class, value) = u32::try_from(code)
                .ok()
                .and_then(WordClass::unpack)
                .ok_or(DataError::UnknownWordClass {
                    span: line.span.clone(),
                    code,
                })?;
            if class == WordClass::Verb && !(1..=VERB_COUNT).contains(&value) {
                return Err(DataError::UnknownVerb {
                    span: line.span.clone(),
                    code: value,
                });
            }
            if self.world.vocabulary().len() >= MAX_VOCABULARY {
                return Err(DataError::Overflow {
                    span: line.span.clone(),
                    table: "vocabulary",
                    limit: MAX_VOCABULARY,
                });
            }
            let entry = VocabEntry {
                token: Token::fold(word),
                class,
                code: value,
            };
            self.world.vocabulary_mut().push(entry.clone());
            self.word_rows.push(WordRow {
                span: line.span.clone(),
                entry,
            });
        }
    }
}

/// Every room a travel row can lead to must exist.
fn check_destinations(parsed: &Parsed) -> DataResult<()> {
    for row in &parsed.travel_rows {
        let targets = match row.destination {
            Destination::Room(to) => vec![to],
            Destination::Sequence(seq) => seq.rooms(),
        };
        if let Some(to) = targets
            .into_iter()
            .find(|&to| parsed.world.location(to).is_none())
        {
            return Err(DataError::DanglingRoom {
                span: row.span.clone(),
                from: row.from.get(),
                to: to.get(),
            });
        }
    }
    Ok(())
}

/// Every special word must have a message to print.
fn check_special_words(parsed: &Parsed) -> DataResult<()> {
    let silent = parsed.word_rows.iter().find(|row| {
        row.entry.class == WordClass::Special
            && parsed.world.message(MessageId(row.entry.code)).is_none()
    });
    match silent {
        Some(row) => Err(DataError::SilentWord {
            span: row.span.clone(),
            word: row.entry.token.to_string(),
            code: row.entry.code,
        }),
        None => Ok(()),
    }
}

/// Post-load checks that do not stop the data from being played.
pub(crate) fn lint(parsed: &Parsed) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    let vocab = parsed.world.vocabulary();

    for row in &parsed.travel_rows {
        for motion in &row.motions {
            if *motion != MotionCode::ANY && !vocab.has_motion(motion.get()) {
                warnings.push(
                    Diagnostic::warning(
                        row.span.clone(),
                        format!("motion {motion} from room {} has no vocabulary word", row.from),
                    )
                    .with_label("no word can select this exit"),
                );
            }
        }
    }

    for row in &parsed.word_rows {
        let Some(first) = vocab.lookup(&row.entry.token) else {
            continue;
        };
        if first.class != row.entry.class {
            warnings.push(
                Diagnostic::warning(
                    row.span.clone(),
                    format!(
                        "{} is already a {} word; this {} meaning is never used",
                        row.entry.token, first.class, row.entry.class
                    ),
                )
                .with_label("shadowed by an earlier entry"),
            );
        }
    }

    for (id, loc) in parsed.world.locations() {
        if loc.long.is_none() && id != LocationId::GAME_OVER {
            warnings.push(Diagnostic::warning(
                0..0,
                format!("room {id} has no long description"),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = "\
1
1    YOU ARE AT THE END OF A ROAD.
1    A BUILDING IS NEARBY.
2    YOU ARE INSIDE.
-1
2
1    END OF ROAD.
-1
3
1    2    2   3
2    1    11
2    305  1
-1
4
2    ROAD
3    ENTER
11   OUT
1002 LAMP
2001 TAKE
3051 HELP
-1
5
2    THERE IS A LAMP HERE.
102  YOUR LAMP IS ON.
-1
6
1    WELCOME.
54   OK
-1
0
";

    #[test]
    fn parses_every_section() {
        let parsed = parse_records(TINY).unwrap();
        let world = &parsed.world;
        let road = world.location(LocationId(1)).unwrap();
        assert_eq!(road.long.as_ref().unwrap().len(), 2);
        assert_eq!(road.short.as_ref().unwrap().headline(), Some("END OF ROAD."));
        assert_eq!(world.travel(LocationId(1)).len(), 1);
        assert_eq!(world.travel(LocationId(2)).len(), 2);
        assert_eq!(
            world.travel(LocationId(2))[1].destination,
            Destination::Sequence(ForcedSequence::Fatal)
        );
        let take = world.vocabulary().lookup_word("TAKE").unwrap();
        assert_eq!((take.class, take.code), (WordClass::Verb, 1));
        assert_eq!(
            world.item_appearance(ItemId::LAMP, 1).unwrap().headline(),
            Some("YOUR LAMP IS ON.")
        );
        assert_eq!(world.message(MessageId(54)).unwrap().headline(), Some("OK"));
        assert_eq!(parsed.travel_rows.len(), 3);
        assert_eq!(parsed.word_rows.len(), 6);
    }

    #[test]
    fn unknown_section_is_fatal() {
        let err = parse_records("7\n-1\n0\n").unwrap_err();
        assert!(matches!(err, DataError::UnknownSection { kind: 7, span } if span == (0..1)));
    }

    #[test]
    fn truncated_input_is_fatal() {
        let err = parse_records("1\n1    HELLO\n").unwrap_err();
        assert!(matches!(err, DataError::UnexpectedEof { .. }));
    }

    #[test]
    fn blank_text_is_fatal() {
        let err = parse_records("6\n12\n-1\n0\n").unwrap_err();
        assert!(matches!(err, DataError::BlankText { key: 12, .. }));
    }

    #[test]
    fn unknown_sequence_is_fatal() {
        let err = parse_records("3\n1 399 2\n-1\n0\n").unwrap_err();
        assert!(matches!(err, DataError::UnknownSequence { code: 399, .. }));
    }

    #[test]
    fn travel_row_without_words_is_fatal() {
        let err = parse_records("3\n1 2\n-1\n0\n").unwrap_err();
        assert!(matches!(err, DataError::EmptyTravelRow { room: 1, .. }));
    }

    #[test]
    fn unknown_word_class_is_fatal() {
        let err = parse_records("4\n7001 FROB\n-1\n0\n").unwrap_err();
        assert!(matches!(err, DataError::UnknownWordClass { code: 7001, .. }));
    }

    #[test]
    fn verb_without_an_action_is_fatal() {
        let err = parse_records("4\n2001 TAKE\n2017 FROB\n-1\n0\n").unwrap_err();
        assert!(matches!(err, DataError::UnknownVerb { code: 17, span } if span == (12..21)));
    }

    #[test]
    fn special_word_without_a_message_is_fatal() {
        let source = "1\n1    HERE.\n-1\n4\n3054 OK\n3051 HELP\n-1\n6\n54   OK\n-1\n0\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(
            err,
            DataError::SilentWord { code: 51, ref word, .. } if word == "HELP"
        ));
    }

    #[test]
    fn dangling_room_is_fatal() {
        let source = "1\n1    HERE.\n-1\n3\n1 250 2\n-1\n0\n";
        let err = parse(source).unwrap_err();
        assert!(matches!(err, DataError::DanglingRoom { from: 1, to: 250, .. }));
    }

    #[test]
    fn text_overflow_is_fatal() {
        let mut source = String::from("6\n");
        for _ in 0..=MAX_TEXT_LINES {
            source.push_str("1    AGAIN\n");
        }
        source.push_str("-1\n0\n");
        let err = parse_records(&source).unwrap_err();
        assert!(matches!(err, DataError::Overflow { table: "text", .. }));
    }

    #[test]
    fn vocabulary_overflow_is_fatal() {
        let mut source = String::from("4\n");
        for _ in 0..=MAX_VOCABULARY {
            source.push_str("2 ROAD\n");
        }
        source.push_str("-1\n0\n");
        let err = parse_records(&source).unwrap_err();
        assert!(matches!(
            err,
            DataError::Overflow { table: "vocabulary", limit: MAX_VOCABULARY, .. }
        ));
    }

    #[test]
    fn lint_flags_unreachable_motions_and_shadowed_words() {
        let source = "1\n1    HERE.\n2    THERE.\n-1\n3\n1 2 2 77\n-1\n4\n2 ROAD\n1002 ROAD\n-1\n0\n";
        let parsed = parse_records(source).unwrap();
        let warnings = lint(&parsed);
        assert!(warnings.iter().any(|w| w.message.contains("motion 77")));
        assert!(warnings.iter().any(|w| w.message.contains("ROAD is already a motion word")));
    }
}
