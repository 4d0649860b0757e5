//! Configuration options for Ako serialization.
//!
//! - [`AkoOptions`]: main configuration struct
//! - [`Indent`]: tab or space indentation for formatted output
//!
//! ## Examples
//!
//! ```rust
//! use serde_ako::{serialize, ako, AkoOptions};
//!
//! let value = ako!({ "player": { "level": 39 } });
//!
//! assert_eq!(
//!     serialize(&value, &AkoOptions::new()),
//!     "player [\n\tlevel 39\n]\n"
//! );
//! assert_eq!(
//!     serialize(&value, &AkoOptions::new().with_spaces()),
//!     "player [\n    level 39\n]\n"
//! );
//! assert_eq!(
//!     serialize(&value, &AkoOptions::compact()),
//!     "player [ level 39 ] "
//! );
//! ```

/// Indentation written once per nesting level in formatted output.
///
/// # Examples
///
/// ```rust
/// use serde_ako::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Four spaces per level.
    pub const SPACES: Indent = Indent::Spaces(4);

    /// Returns the text written for one level of indentation.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Configuration options for Ako serialization.
///
/// With `formatting` enabled every statement ends with a newline and nested
/// blocks are indented; with it disabled statements are separated by a single
/// space and nothing is indented.
///
/// # Examples
///
/// ```rust
/// use serde_ako::{AkoOptions, Indent};
///
/// // Formatted, tab-indented
/// let options = AkoOptions::new();
/// assert!(options.formatting);
/// assert_eq!(options.indent, Indent::Tab);
///
/// // Single line
/// let options = AkoOptions::compact();
/// assert!(!options.formatting);
///
/// // The two flags of the classic interface
/// assert_eq!(AkoOptions::from_flags(true, true), AkoOptions::new().with_spaces());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AkoOptions {
    pub formatting: bool,
    pub indent: Indent,
}

impl Default for AkoOptions {
    fn default() -> Self {
        AkoOptions {
            formatting: true,
            indent: Indent::Tab,
        }
    }
}

impl AkoOptions {
    /// Creates default options (formatted, tab indentation).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatted output with tab indentation.
    #[must_use]
    pub fn pretty() -> Self {
        Self::default()
    }

    /// Single-line output: statements separated by spaces, no indentation.
    #[must_use]
    pub fn compact() -> Self {
        AkoOptions {
            formatting: false,
            ..Default::default()
        }
    }

    /// Maps the `do_formatting` / `use_spaces` flag pair onto options.
    ///
    /// `use_spaces` only matters when `do_formatting` is set.
    #[must_use]
    pub fn from_flags(do_formatting: bool, use_spaces: bool) -> Self {
        let options = AkoOptions::new().with_formatting(do_formatting);
        if use_spaces {
            options.with_spaces()
        } else {
            options
        }
    }

    #[must_use]
    pub fn with_formatting(mut self, formatting: bool) -> Self {
        self.formatting = formatting;
        self
    }

    /// Indents with four spaces per level instead of a tab.
    #[must_use]
    pub fn with_spaces(mut self) -> Self {
        self.indent = Indent::SPACES;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// The indentation unit actually written, empty when not formatting.
    pub(crate) fn indent_unit(&self) -> String {
        if self.formatting {
            self.indent.unit()
        } else {
            String::new()
        }
    }

    /// The statement terminator: a newline when formatting, else a space.
    pub(crate) const fn end_statement(&self) -> &'static str {
        if self.formatting {
            "\n"
        } else {
            " "
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(AkoOptions::from_flags(false, false), AkoOptions::compact());
        assert_eq!(AkoOptions::from_flags(false, true).indent_unit(), "");
        assert_eq!(AkoOptions::from_flags(true, false).indent_unit(), "\t");
        assert_eq!(AkoOptions::from_flags(true, true).indent_unit(), "    ");
    }

    #[test]
    fn test_end_statement() {
        assert_eq!(AkoOptions::new().end_statement(), "\n");
        assert_eq!(AkoOptions::compact().end_statement(), " ");
    }

    #[test]
    fn test_custom_indent() {
        let options = AkoOptions::new().with_indent(Indent::Spaces(2));
        assert_eq!(options.indent_unit(), "  ");
    }
}
