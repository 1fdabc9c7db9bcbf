//! Loading the built-in data set and alternative files.

use std::io::Write;

use cv_core::{
    Destination, ForcedSequence, Holder, ItemId, LocationId, MessageId, MotionCode, WordClass,
};
use cv_data::{DataError, load_default, load_file, render_diagnostics};
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

#[test]
fn default_data_loads() {
    let loaded = load_default().unwrap();
    let world = &loaded.data;
    let road = world.location(LocationId::START).unwrap();
    assert_eq!(
        road.long.as_ref().unwrap().headline(),
        Some("YOU ARE STANDING AT THE END OF A ROAD BEFORE A SMALL BRICK")
    );
    assert!(road.is_lit());
    assert!(world.location(LocationId(16)).unwrap().is_forced());
    assert!(!world.location(LocationId(11)).unwrap().is_lit());
}

#[test]
fn road_exits_follow_table_order() {
    let loaded = load_default().unwrap();
    let world = &loaded.data;
    let road = world.location(LocationId::START).unwrap();
    let west = road.exit_for(MotionCode(44)).unwrap();
    assert_eq!(west.destination, Destination::Room(LocationId(2)));
    let inside = road.exit_for(MotionCode(19)).unwrap();
    assert_eq!(inside.destination, Destination::Room(LocationId::WELL_HOUSE));
}

#[test]
fn grate_uses_a_forced_sequence() {
    let loaded = load_default().unwrap();
    let outside = loaded.data.location(LocationId::OUTSIDE_GRATE).unwrap();
    let down = outside.exit_for(MotionCode(30)).unwrap();
    assert!(matches!(
        down.destination,
        Destination::Sequence(ForcedSequence::PropertyGate {
            item: ItemId::GRATE,
            ..
        })
    ));
}

#[test]
fn vocabulary_resolves_synonyms_and_classes() {
    let loaded = load_default().unwrap();
    let vocab = loaded.data.vocabulary();
    let lamp = vocab.lookup_word("headlamp").unwrap();
    assert_eq!((lamp.class, lamp.code), (WordClass::Object, 2));
    let xyzzy = vocab.lookup_word("XYZZY").unwrap();
    assert_eq!(xyzzy.class, WordClass::Motion);
    let help = vocab.lookup_word("help").unwrap();
    assert_eq!(help.class, WordClass::Special);
    assert!(vocab.lookup_word("FROBOZZ").is_none());
}

#[test]
fn items_start_where_expected() {
    let loaded = load_default().unwrap();
    let world = &loaded.data;
    let keys = world.item(ItemId::KEYS).unwrap();
    assert_eq!(keys.initial, Holder::Room(LocationId::WELL_HOUSE));
    assert!(world.is_fixed(ItemId::SNAKE));
    assert_eq!(
        world.item_appearance(ItemId::GRATE, 1).unwrap().headline(),
        Some("THE GRATE IS OPEN.")
    );
    assert_eq!(
        world.item_appearance(ItemId::LAMP, 1).unwrap().headline(),
        Some("THERE IS A SHINY BRASS LAMP NEARBY.")
    );
    assert!(world.item_appearance(ItemId::FISSURE, 0).is_none());
}

#[test]
fn messages_are_present() {
    let loaded = load_default().unwrap();
    let welcome = loaded.data.message(MessageId(65)).unwrap();
    assert_eq!(
        welcome.headline(),
        Some("WELCOME TO ADVENTURE!!  WOULD YOU LIKE INSTRUCTIONS?")
    );
    assert!(loaded.data.message(MessageId(1)).unwrap().len() > 1);
}

// ---------------------------------------------------------------------------
// Files and failures
// ---------------------------------------------------------------------------

#[test]
fn load_file_reads_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(cv_data::DEFAULT_SOURCE.as_bytes()).unwrap();
    let loaded = load_file(file.path()).unwrap();
    assert!(loaded.data.location_count() > 70);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_file(std::path::Path::new("/nonexistent/advdat")).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn truncated_file_is_rejected_with_a_span() {
    let cut = &cv_data::DEFAULT_SOURCE[..cv_data::DEFAULT_SOURCE.len() / 2];
    let err = cv_data::load_source(cut).unwrap_err();
    assert!(matches!(err, DataError::UnexpectedEof { .. }));
    let rendered = render_diagnostics(cut, "advdat", &[err.to_diagnostic()]);
    assert!(rendered.contains("closing section marker"));
}

#[test]
fn verb_without_an_action_is_rejected_at_load() {
    let source = cv_data::DEFAULT_SOURCE.replacen("\n4\n", "\n4\n2017 FROB\n", 1);
    let err = cv_data::load_source(&source).unwrap_err();
    assert!(matches!(err, DataError::UnknownVerb { code: 17, .. }));
    let span = err.span().unwrap();
    assert_eq!(&source[span], "2017 FROB");
}
