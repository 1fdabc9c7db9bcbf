use std::path::Path;

use colored::Colorize;
use cv_core::{Destination, ForcedSequence, Holder, LocationId, MotionCode, WordClass, WorldData};

pub fn run(data: Option<&Path>, room: u16) -> Result<(), String> {
    let loaded = super::load(data)?;
    let world = &loaded.data;
    let id = LocationId(room);

    let location = world
        .location(id)
        .ok_or_else(|| format!("room not found: {room}"))?;

    // Header
    let condition = format!("{:?}", location.condition).to_lowercase();
    println!("  {} [{}]", format!("Room {id}").bold(), condition.dimmed());
    println!();

    if let Some(long) = &location.long {
        for line in long.lines() {
            println!("  {line}");
        }
        println!();
    }
    if let Some(short) = &location.short {
        println!("  {} {}", "short:".dimmed(), short.headline().unwrap_or(""));
        println!();
    }

    let edges = world.travel(id);
    if !edges.is_empty() {
        println!("  {}:", "Exits".bold());
        for edge in edges {
            let words: Vec<String> = edge
                .motions
                .iter()
                .map(|&m| motion_words(world, m))
                .collect();
            println!(
                "    {} -> {}",
                words.join(", "),
                destination_label(&edge.destination)
            );
        }
        println!();
    }

    let items: Vec<_> = world
        .items()
        .filter(|def| def.initial == Holder::Room(id))
        .collect();
    if !items.is_empty() {
        println!("  {}:", "Items".bold());
        for def in items {
            let word = world
                .vocabulary()
                .object_word(def.id.get())
                .map_or_else(|| format!("#{}", def.id), |t| t.to_string());
            let fixed = if def.fixed { " (fixed)" } else { "" };
            println!("    {word}{}", fixed.dimmed());
        }
    }

    Ok(())
}

/// The words that produce a motion code, or the bare code if none do.
fn motion_words(world: &WorldData, motion: MotionCode) -> String {
    if motion == MotionCode::ANY {
        return "(any)".into();
    }
    let words: Vec<&str> = world
        .vocabulary()
        .iter()
        .filter(|e| e.class == WordClass::Motion && e.code == motion.get())
        .map(|e| e.token.as_str())
        .collect();
    if words.is_empty() {
        format!("#{motion}")
    } else {
        words.join("/")
    }
}

fn destination_label(destination: &Destination) -> String {
    match destination {
        Destination::Room(room) => format!("room {room}"),
        Destination::Sequence(ForcedSequence::Fatal) => "death".into(),
        Destination::Sequence(sequence) => {
            let rooms: Vec<String> = sequence.rooms().iter().map(ToString::to_string).collect();
            format!("room {} (forced)", rooms.join(" or "))
        }
    }
}
