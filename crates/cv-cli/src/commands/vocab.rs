use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use cv_core::WordClass;

const CLASSES: [WordClass; 4] = [
    WordClass::Motion,
    WordClass::Object,
    WordClass::Verb,
    WordClass::Special,
];

pub fn run(data: Option<&Path>, class_filter: Option<&str>) -> Result<(), String> {
    let loaded = super::load(data)?;

    let class = class_filter
        .map(|name| {
            CLASSES
                .into_iter()
                .find(|c| c.name().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    format!("unknown word class: \"{name}\". Use: motion, object, verb, special")
                })
        })
        .transpose()?;

    let entries: Vec<_> = loaded
        .data
        .vocabulary()
        .iter()
        .filter(|e| class.is_none_or(|c| e.class == c))
        .collect();

    if entries.is_empty() {
        println!("  No words found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Word", "Class", "Code"]);

    for entry in &entries {
        table.add_row(vec![
            entry.token.to_string(),
            entry.class.to_string(),
            entry.code.to_string(),
        ]);
    }

    println!("{table}");
    println!("  {} word(s)", entries.len());

    Ok(())
}
