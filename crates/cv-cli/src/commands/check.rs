use std::path::Path;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let loaded = super::load(data)?;
    let world = &loaded.data;

    let name = data.map_or_else(
        || cv_data::DEFAULT_NAME.to_string(),
        |p| p.display().to_string(),
    );
    println!("  All checks passed for '{name}'.");
    println!(
        "  {} rooms, {} items, {} words, {} messages",
        world.location_count(),
        world.items().count(),
        world.vocabulary().len(),
        world.message_count()
    );
    if !loaded.warnings.is_empty() {
        println!("  {} warning(s)", loaded.warnings.len());
    }

    Ok(())
}
