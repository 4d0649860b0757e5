//! # serde_ako
//!
//! A lexer, parser and serializer for the Ako configuration format, with a
//! Serde bridge for typed Rust data.
//!
//! ## What is Ako?
//!
//! Ako is a small configuration language built around tables of key/value
//! statements. It has a handful of compact notations:
//!
//! - `+`, `-` and `;` are the literals `true`, `false` and null, and may be
//!   written before a key: `+fullscreen`
//! - `1280x720` is a numeric vector of two to four components
//! - `window.size 1280x720` assigns through a dotted key path
//! - `[ ... ]` delimits a table and `[[ ... ]]` an array
//! - `#` starts a comment running to the end of the line
//!
//! ```text
//! # display settings
//! window [
//!     title "Ako"
//!     size 1280x720
//!     -fullscreen
//! ]
//! audio.volume 0.8
//! recent [[ "a.ako" "b.ako" ]]
//! ```
//!
//! ## Quick Start
//!
//! ### Dynamic Values
//!
//! ```rust
//! use serde_ako::{parse, serialize, AkoOptions, AkoValue};
//!
//! let doc = parse("window.size 1280x720 +vsync").unwrap();
//! assert_eq!(doc.pointer("vsync"), Some(&AkoValue::Bool(true)));
//!
//! let text = serialize(&doc, &AkoOptions::compact());
//! assert_eq!(text, "window [ size 1280x720 ] +vsync ");
//! ```
//!
//! ### Typed Data
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_ako::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Window {
//!     title: String,
//!     size: [u32; 2],
//!     fullscreen: bool,
//! }
//!
//! let window = Window {
//!     title: "Ako".to_string(),
//!     size: [1280, 720],
//!     fullscreen: false,
//! };
//!
//! let text = to_string(&window).unwrap();
//! assert_eq!(text, "title \"Ako\"\nsize 1280x720\n-fullscreen\n");
//!
//! let back: Window = from_str(&text).unwrap();
//! assert_eq!(window, back);
//! ```
//!
//! ### Building Values with `ako!`
//!
//! ```rust
//! use serde_ako::ako;
//!
//! let value = ako!({ "player": { "name": "Miku", "level": 39 } });
//! assert_eq!(value.to_string(), "player [ name \"Miku\" level 39 ] ");
//! ```
//!
//! ## Known Limits of the Text Form
//!
//! The lexer has no negative number literals and decodes only `\n` among the
//! string escapes, so negative numbers, non-finite floats and strings holding
//! other control characters do not survive a trip through text.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `trace!` per token and per
//! statement, `debug!` for entry-point summaries. Install any logger to see it.
//!
//! ## Demos
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`config_file.rs`** - typed configuration read from and written to Ako
//! - **`dynamic_values.rs`** - working with `AkoValue` without a schema
//! - **`formatting.rs`** - the formatting options side by side
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use lexer::{Lexer, Location, Token, TokenKind};
pub use map::AkoMap;
pub use options::{AkoOptions, Indent};
pub use parser::Parser;
pub use ser::{serialize, Serializer, ValueSerializer};
pub use value::{AkoValue, Number, Vector};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Splits Ako source text into tokens.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{tokenize, TokenKind};
///
/// let tokens = tokenize("size 2x3").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Identifier("size".to_string()),
///         TokenKind::Integer(2),
///         TokenKind::VectorCross,
///         TokenKind::Integer(3),
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Lex`] with the location of the first character that
/// cannot start a token.
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    let tokens = Lexer::new(src).tokenize().map_err(|e| {
        log::debug!("tokenize failed: {}", e);
        e
    })?;
    log::debug!("tokenized {} bytes into {} tokens", src.len(), tokens.len());
    Ok(tokens)
}

/// Parses Ako source text into a value tree.
///
/// A document with no tokens (empty, or only comments) is [`AkoValue::Null`].
///
/// # Examples
///
/// ```rust
/// use serde_ako::{parse, AkoValue};
///
/// assert_eq!(parse("# nothing here").unwrap(), AkoValue::Null);
///
/// let doc = parse("viva.viva \"happy\"").unwrap();
/// assert_eq!(doc.pointer("viva.viva").and_then(AkoValue::as_str), Some("happy"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Lex`] or [`Error::Parse`] on malformed input.
pub fn parse(src: &str) -> Result<AkoValue> {
    let tokens = tokenize(src)?;
    Parser::new(&tokens).parse_document().map_err(|e| {
        log::debug!("parse failed: {}", e);
        e
    })
}

/// Serialize any `T: Serialize` to formatted Ako text (tab indentation).
///
/// # Examples
///
/// ```rust
/// use serde_ako::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "\"x\" 1\ny 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. non-scalar map keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, AkoOptions::default())
}

/// Serialize any `T: Serialize` to formatted Ako text.
///
/// Same output as [`to_string`]; kept for parity with other serde formats.
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, AkoOptions::pretty())
}

/// Serialize any `T: Serialize` to Ako text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{to_string_with_options, AkoOptions};
///
/// let text = to_string_with_options(&vec![1, 2, 3, 4, 5], AkoOptions::compact()).unwrap();
/// assert_eq!(text, "[[ 1 2 3 4 5 ]]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: AkoOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(serialize(&value, &options))
}

/// Convert any `T: Serialize` to an `AkoValue`.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{to_value, AkoValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: AkoValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_table());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<AkoValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as formatted Ako text.
///
/// # Examples
///
/// ```rust
/// use serde_ako::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![true, false]).unwrap();
/// assert_eq!(buffer, b"[[\n\t+\n\t-\n]]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, AkoOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: AkoOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Interpret an `AkoValue` as an instance of type `T`.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{ako, from_value};
///
/// let size: (u32, u32) = from_value(ako!([1280, 720])).unwrap();
/// assert_eq!(size, (1280, 720));
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: AkoValue) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(value))
}

/// Deserialize an instance of type `T` from a string of Ako text.
///
/// # Examples
///
/// ```rust
/// use serde_ako::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("\"x\" 1 y 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid Ako or cannot be deserialized
/// to type `T`. Lex and parse errors carry line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::from_str(s)?)
}

/// Deserialize an instance of type `T` from an I/O stream of Ako text.
///
/// # Examples
///
/// ```rust
/// use serde_ako::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"[[ 1 2 3 4 5 ]]");
/// let values: Vec<u8> = from_reader(cursor).unwrap();
/// assert_eq!(values, vec![1, 2, 3, 4, 5]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid Ako, or the
/// data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of Ako text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid Ako, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
