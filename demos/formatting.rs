//! The serializer's formatting options side by side.
//!
//! Run with: cargo run --example formatting

use serde::Serialize;
use serde_ako::{to_string_with_options, AkoOptions, Indent};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Level {
    name: String,
    gravity: f64,
    bounds: [f64; 4],
    spawn_points: Vec<[u32; 2]>,
    boss: Option<Boss>,
}

#[derive(Debug, Serialize)]
struct Boss {
    name: String,
    hp: u32,
    enraged: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let level = Level {
        name: "Castle".to_string(),
        gravity: 9.8,
        bounds: [0.0, 0.0, 640.0, 480.0],
        spawn_points: vec![[10, 20], [30, 40], [50, 60], [70, 80], [90, 100]],
        boss: Some(Boss {
            name: "Dragon".to_string(),
            hp: 5000,
            enraged: false,
        }),
    };

    println!("Formatted, tabs (default):");
    println!("{}", to_string_with_options(&level, AkoOptions::new())?);

    println!("Formatted, four spaces:");
    println!("{}", to_string_with_options(&level, AkoOptions::new().with_spaces())?);

    println!("Formatted, two spaces:");
    let two = AkoOptions::new().with_indent(Indent::Spaces(2));
    println!("{}", to_string_with_options(&level, two)?);

    println!("Compact:");
    println!("{}", to_string_with_options(&level, AkoOptions::compact())?);

    Ok(())
}
