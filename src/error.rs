//! Error types for Ako lexing, parsing and the serde bridge.
//!
//! Errors are raised at the first violation and abort the whole call; there is
//! no recovery or multi-error collection.
//!
//! ## Error Categories
//!
//! - **Lex errors**: a character the lexer does not recognize, or a numeric
//!   literal that does not fit in 64 bits
//! - **Parse errors**: structural grammar violations (unexpected token,
//!   unbalanced braces, oversized vector, unresolved key)
//! - **Serde errors**: type mismatches while converting between Rust types and
//!   [`AkoValue`](crate::AkoValue)
//! - **I/O errors**: reader/writer failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_ako::{parse, Error};
//!
//! let err = parse("hm !").unwrap_err();
//! assert!(err.is_lex());
//! assert_eq!(err.location().map(|loc| loc.column), Some(4));
//! ```

use crate::lexer::Location;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing Ako.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Unrecognized input character
    #[error("{message} at {location}")]
    Lex { message: String, location: Location },

    /// Structural grammar violation
    #[error("{message}{}", fmt_span(.start, .end))]
    Parse {
        message: String,
        start: Option<Location>,
        end: Option<Location>,
    },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Rust data that the Ako value model cannot hold
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error, usually raised by serde
    #[error("{0}")]
    Custom(String),
}

fn fmt_span(start: &Option<Location>, end: &Option<Location>) -> String {
    match (start, end) {
        (Some(start), Some(end)) if start != end => format!(" at {} to {}", start, end),
        (Some(start), _) => format!(" at {}", start),
        (None, _) => String::new(),
    }
}

impl Error {
    /// Creates a lex error at the given location.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ako::{Error, Location};
    ///
    /// let err = Error::lex("Unexpected character '!'", Location::new(1, 4));
    /// assert_eq!(err.to_string(), "Unexpected character '!' at 1:4");
    /// ```
    pub fn lex(message: impl Into<String>, location: Location) -> Self {
        Error::Lex {
            message: message.into(),
            location,
        }
    }

    /// Creates a parse error without location information.
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
            start: None,
            end: None,
        }
    }

    /// Creates a parse error pointing at a single location.
    pub fn parse_at(message: impl Into<String>, location: Location) -> Self {
        Error::Parse {
            message: message.into(),
            start: Some(location),
            end: None,
        }
    }

    /// Creates a parse error covering a span of the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ako::{Error, Location};
    ///
    /// let err = Error::parse_span("vector size is greater than 4", Location::new(1, 4), Location::new(1, 13));
    /// assert_eq!(err.to_string(), "vector size is greater than 4 at 1:4 to 1:13");
    /// ```
    pub fn parse_span(message: impl Into<String>, start: Location, end: Location) -> Self {
        Error::Parse {
            message: message.into(),
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates an unsupported type error for data that cannot be represented in Ako.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for errors raised by the lexer.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self, Error::Lex { .. })
    }

    /// Returns `true` for errors raised by the parser.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns the source location the error points at, if any.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Error::Lex { location, .. } => Some(*location),
            Error::Parse { start, .. } => *start,
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(Error::parse("boom").to_string(), "boom");
        assert_eq!(
            Error::parse_at("boom", Location::new(2, 3)).to_string(),
            "boom at 2:3"
        );
        let loc = Location::new(2, 3);
        assert_eq!(
            Error::parse_span("boom", loc, loc).to_string(),
            "boom at 2:3"
        );
    }

    #[test]
    fn test_location_accessor() {
        let err = Error::lex("bad", Location::new(1, 7));
        assert_eq!(err.location(), Some(Location::new(1, 7)));
        assert!(err.is_lex());
        assert!(!err.is_parse());
        assert_eq!(Error::custom("x").location(), None);
    }
}
