//! Working with AkoValue for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_ako::{ako, parse, to_string_pretty, to_value, AkoValue};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Player {
    name: String,
    level: u32,
    spawn: [f64; 3],
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a document with the ako! macro
    let server = ako!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics", "chat", "voice"],
        "debug": true
    });

    println!("Server as Ako:\n{}\n", to_string_pretty(&server)?);

    if let Some(host) = server.pointer("host").and_then(AkoValue::as_str) {
        println!("Accessing field 'host': {}", host);
    }
    if let Some(port) = server.pointer("port").and_then(AkoValue::as_i64) {
        println!("Accessing field 'port': {}", port);
    }
    if let Some(features) = server.pointer("features").and_then(AkoValue::as_array) {
        println!("Accessing field 'features': {} items\n", features.len());
    }

    // Parse text without a schema
    let doc = parse("player.name \"Miku\" player.spawn 1x2.5x3 +player.online")?;
    if let Some(AkoValue::Vector(spawn)) = doc.pointer("player.spawn") {
        println!("Spawn vector has {} components: {}", spawn.len(), spawn);
    }
    println!("Compact form: {}\n", doc);

    // Convert an existing struct to AkoValue
    let player = Player {
        name: "Luka".to_string(),
        level: 42,
        spawn: [0.0, 10.5, 3.0],
    };

    let value = to_value(&player)?;
    println!("Player as value:\n{}\n", to_string_pretty(&value)?);

    println!("Type checks:");
    println!("  is_table:  {}", value.is_table());
    println!("  is_array:  {}", value.is_array());
    println!("  is_vector: {}", value.is_vector());

    Ok(())
}
