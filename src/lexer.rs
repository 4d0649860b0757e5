//! Ako tokenization.
//!
//! The [`Lexer`] makes a single forward pass over the source text and produces
//! an ordered sequence of [`Token`]s, each annotated with the span of source
//! it was read from. Whitespace and `#` line comments are skipped.
//!
//! ```rust
//! use serde_ako::{tokenize, TokenKind};
//!
//! let tokens = tokenize("size 1280x720").unwrap();
//! let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier("size".to_string()),
//!         TokenKind::Integer(1280),
//!         TokenKind::VectorCross,
//!         TokenKind::Integer(720),
//!     ]
//! );
//! ```

use crate::{Error, Result};
use std::fmt;

/// A 1-based line/column position in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new(1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The kind of a token, carrying the decoded literal where there is one.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `+` or `-`
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Identifier(String),
    Dot,
    /// `;`, the null literal
    Semicolon,
    Ampersand,
    OpenBrace,
    CloseBrace,
    OpenDoubleBrace,
    CloseDoubleBrace,
    /// The `x` between vector components
    VectorCross,
}

impl TokenKind {
    /// Returns `true` for integer and float literals.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, TokenKind::Integer(_) | TokenKind::Float(_))
    }

    /// A short human-readable name used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            TokenKind::Boolean(_) => "boolean",
            TokenKind::Integer(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Dot => "'.'",
            TokenKind::Semicolon => "';'",
            TokenKind::Ampersand => "'&'",
            TokenKind::OpenBrace => "'['",
            TokenKind::CloseBrace => "']'",
            TokenKind::OpenDoubleBrace => "'[['",
            TokenKind::CloseDoubleBrace => "']]'",
            TokenKind::VectorCross => "vector delimiter 'x'",
        }
    }
}

/// A lexical token and the span of source it covers.
///
/// `end` is the location just past the last consumed character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Location,
    pub end: Location,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, start: Location, end: Location) -> Self {
        Token { kind, start, end }
    }
}

/// Single-pass Ako lexer.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    location: Location,
    // Byte offset where the most recent numeric literal ended.
    number_end: Option<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            location: Location::default(),
            number_end: None,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_nth(&self, offset: usize) -> Option<char> {
        self.input[self.position..].chars().nth(offset)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
        Some(ch)
    }

    fn skip_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.next_char();
        }
    }

    /// Consumes the whole input and returns its tokens in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] on the first unrecognized character.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            log::trace!("token {:?} at {}", token.kind, token.start);
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Reads the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] on an unrecognized character.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            match self.peek_char() {
                None => return Ok(None),
                Some(' ' | '\t' | '\n') => {
                    self.next_char();
                }
                Some('#') => self.skip_comment(),
                Some(_) => break,
            }
        }

        let start = self.location;
        let start_position = self.position;
        let kind = self.lex_kind(start)?;
        if kind.is_number() {
            self.number_end = Some(self.position);
        }
        debug_assert!(self.position > start_position);
        Ok(Some(Token::new(kind, start, self.location)))
    }

    fn lex_kind(&mut self, start: Location) -> Result<TokenKind> {
        let Some(ch) = self.peek_char() else {
            return Err(Error::lex("Unexpected end of input", start));
        };

        let single = match ch {
            '+' => Some(TokenKind::Boolean(true)),
            '-' => Some(TokenKind::Boolean(false)),
            ';' => Some(TokenKind::Semicolon),
            '.' => Some(TokenKind::Dot),
            '&' => Some(TokenKind::Ampersand),
            '[' if self.peek_nth(1) == Some('[') => {
                self.next_char();
                Some(TokenKind::OpenDoubleBrace)
            }
            '[' => Some(TokenKind::OpenBrace),
            ']' if self.peek_nth(1) == Some(']') => {
                self.next_char();
                Some(TokenKind::CloseDoubleBrace)
            }
            ']' => Some(TokenKind::CloseBrace),
            'x' if self.is_vector_cross() => Some(TokenKind::VectorCross),
            _ => None,
        };
        if let Some(kind) = single {
            self.next_char();
            return Ok(kind);
        }

        match ch {
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.lex_identifier()),
            c if c.is_ascii_digit() => self.lex_number(start),
            '"' => Ok(self.lex_string()),
            other => Err(Error::lex(
                format!("Unexpected character '{}'", other),
                start,
            )),
        }
    }

    /// An `x` separates vector components when it directly follows a number
    /// or stands alone; otherwise it starts an identifier such as `x86_64`.
    fn is_vector_cross(&self) -> bool {
        if self.number_end == Some(self.position) {
            return true;
        }
        !matches!(self.peek_nth(1), Some(c) if is_identifier_char(c))
    }

    fn lex_identifier(&mut self) -> TokenKind {
        let start = self.position;
        while matches!(self.peek_char(), Some(c) if is_identifier_char(c)) {
            self.next_char();
        }
        TokenKind::Identifier(self.input[start..self.position].to_string())
    }

    fn lex_number(&mut self, location: Location) -> Result<TokenKind> {
        let start = self.position;
        self.skip_digits();

        if self.peek_char() == Some('.') {
            self.next_char();
            self.skip_digits();
            let text = &self.input[start..self.position];
            text.parse::<f64>()
                .map(TokenKind::Float)
                .map_err(|_| Error::lex(format!("Invalid float literal '{}'", text), location))
        } else {
            let text = &self.input[start..self.position];
            text.parse::<i64>().map(TokenKind::Integer).map_err(|_| {
                Error::lex(format!("Integer literal '{}' out of range", text), location)
            })
        }
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.next_char();
        }
    }

    // Unterminated strings run to end of input.
    fn lex_string(&mut self) -> TokenKind {
        self.next_char(); // opening quote
        let mut result = String::new();

        while let Some(ch) = self.next_char() {
            match ch {
                '"' => break,
                '\\' => match self.next_char() {
                    Some('n') => result.push('\n'),
                    Some(other) => result.push(other),
                    None => result.push('\\'),
                },
                other => result.push(other),
            }
        }

        TokenKind::String(result)
    }
}

#[inline]
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` when `key` can be written without quotes.
pub(crate) fn is_bare_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    key != "x" && chars.all(is_identifier_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            kinds("+ - ; . & [ ] [[ ]]"),
            vec![
                TokenKind::Boolean(true),
                TokenKind::Boolean(false),
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Ampersand,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::OpenDoubleBrace,
                TokenKind::CloseDoubleBrace,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("39 39.39 7."),
            vec![
                TokenKind::Integer(39),
                TokenKind::Float(39.39),
                TokenKind::Float(7.0),
            ]
        );
    }

    #[test]
    fn test_integer_overflow() {
        let err = Lexer::new("n 99999999999999999999").tokenize().unwrap_err();
        assert!(err.is_lex());
        assert_eq!(err.location(), Some(Location::new(1, 3)));
    }

    #[test]
    fn test_vector_cross_after_number() {
        assert_eq!(
            kinds("1x2.5x3"),
            vec![
                TokenKind::Integer(1),
                TokenKind::VectorCross,
                TokenKind::Float(2.5),
                TokenKind::VectorCross,
                TokenKind::Integer(3),
            ]
        );
        assert_eq!(
            kinds("1 x 2"),
            vec![
                TokenKind::Integer(1),
                TokenKind::VectorCross,
                TokenKind::Integer(2),
            ]
        );
    }

    #[test]
    fn test_identifier_starting_with_x() {
        assert_eq!(
            kinds("x86_64 2x2"),
            vec![
                TokenKind::Identifier("x86_64".to_string()),
                TokenKind::Integer(2),
                TokenKind::VectorCross,
                TokenKind::Integer(2),
            ]
        );
        assert_eq!(
            kinds("a 1\nxpos 3"),
            vec![
                TokenKind::Identifier("a".to_string()),
                TokenKind::Integer(1),
                TokenKind::Identifier("xpos".to_string()),
                TokenKind::Integer(3),
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r#""1 \"2\" 3" "a\nb" "\t""#),
            vec![
                TokenKind::String("1 \"2\" 3".to_string()),
                TokenKind::String("a\nb".to_string()),
                TokenKind::String("t".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(kinds("\"abc"), vec![TokenKind::String("abc".to_string())]);
        assert_eq!(kinds("\"abc\\"), vec![TokenKind::String("abc\\".to_string())]);
    }

    #[test]
    fn test_comments_and_locations() {
        let tokens = Lexer::new("# note\n  key +\n").tokenize().unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start, Location::new(2, 3));
        assert_eq!(tokens[0].end, Location::new(2, 6));
        assert_eq!(tokens[1].start, Location::new(2, 7));
        assert_eq!(tokens[1].end, Location::new(2, 8));
    }

    #[test]
    fn test_carriage_return_is_rejected() {
        let err = Lexer::new("a 1\r\n").tokenize().unwrap_err();
        assert!(err.is_lex());
        assert_eq!(err.location(), Some(Location::new(1, 4)));
    }

    #[test]
    fn test_tab_advances_one_column() {
        let tokens = Lexer::new("\tk").tokenize().unwrap();
        assert_eq!(tokens[0].start, Location::new(1, 2));
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("hm !").tokenize().unwrap_err();
        assert_eq!(
            err,
            Error::lex("Unexpected character '!'", Location::new(1, 4))
        );
    }

    #[test]
    fn test_bare_identifier() {
        assert!(is_bare_identifier("x86_64"));
        assert!(is_bare_identifier("_private"));
        assert!(!is_bare_identifier("x"));
        assert!(!is_bare_identifier("m i k u"));
        assert!(!is_bare_identifier("2nd"));
        assert!(!is_bare_identifier(""));
    }
}
