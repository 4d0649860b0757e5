//! Typed application settings stored as an Ako file.
//!
//! Run with: cargo run --example config_file

use serde::{Deserialize, Serialize};
use serde_ako::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Settings {
    window: Window,
    audio: Audio,
    recent_files: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Window {
    title: String,
    size: [u32; 2],
    fullscreen: bool,
    vsync: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Audio {
    volume: f64,
    device: Option<String>,
}

const SETTINGS: &str = r#"
# Written by hand: dotted paths, value-first booleans and vectors.
window.title "Ako demo"
window.size 1280x720
-window.fullscreen
+window.vsync

audio [
    volume 0.8
    ;device
]

recent_files [[
    "levels/intro.ako"
    "levels/castle.ako"
]]
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let settings: Settings = from_str(SETTINGS)?;
    println!("Loaded settings:\n{:#?}\n", settings);

    // Writing back produces the canonical form.
    let canonical = to_string(&settings)?;
    println!("Canonical Ako:\n{}", canonical);

    let reloaded: Settings = from_str(&canonical)?;
    assert_eq!(settings, reloaded);
    println!("Round trip OK");

    Ok(())
}
