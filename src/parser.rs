//! Recursive-descent parser from tokens to [`AkoValue`].
//!
//! The parser walks the token slice once, with at most two tokens of
//! lookahead, and never backtracks. It depends only on the [`Token`] contract
//! of the lexer.
//!
//! ## Grammar
//!
//! ```text
//! document      := sequence | mapping | '[' mapping ']'
//! mapping       := (table_element)*
//! table_element := (literal)? key ('.' key)* (value)?
//! key           := identifier | string
//! sequence      := '[[' value* ']]'
//! vector        := number ('x' number){1,3}
//! value         := literal | vector | number | string | sequence | '[' mapping ']'
//! literal       := '+' | '-' | ';'
//! ```
//!
//! A table element carries its value either before the key (only for the
//! `+`, `-` and `;` literals) or after it.

use crate::lexer::{Token, TokenKind};
use crate::value::{Number, Vector};
use crate::{AkoMap, AkoValue, Error, Result};

/// Parses a token sequence produced by [`Lexer`](crate::Lexer).
pub struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    fn peek_nth(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.position + offset)
    }

    fn peek_kind(&self) -> Option<&'t TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn next_token(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    fn last_consumed(&self) -> Option<&'t Token> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
    }

    fn unexpected_eof(&self, expected: &str) -> Error {
        match self.last_consumed() {
            Some(token) => Error::parse_at(
                format!("expected {}, found end of input", expected),
                token.end,
            ),
            None => Error::parse(format!("expected {}, found end of input", expected)),
        }
    }

    fn unexpected(token: &Token, expected: &str) -> Error {
        Error::parse_at(
            format!("expected {}, found {}", expected, token.kind.describe()),
            token.start,
        )
    }

    /// Parses a whole document.
    ///
    /// Returns [`AkoValue::Null`] when there are no tokens at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on the first structural violation.
    pub fn parse_document(&mut self) -> Result<AkoValue> {
        let document = match self.peek_kind() {
            None => return Ok(AkoValue::Null),
            Some(TokenKind::OpenDoubleBrace) => self.parse_array()?,
            Some(TokenKind::OpenBrace) => AkoValue::Table(self.parse_table(true)?),
            Some(_) => AkoValue::Table(self.parse_table(false)?),
        };

        if let Some(token) = self.peek() {
            return Err(Error::parse_at(
                format!(
                    "unexpected {} after end of document",
                    token.kind.describe()
                ),
                token.start,
            ));
        }
        Ok(document)
    }

    /// Parses any value at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the token cannot start a value.
    pub fn parse_value(&mut self) -> Result<AkoValue> {
        let token = self.peek().ok_or_else(|| self.unexpected_eof("a value"))?;

        match &token.kind {
            TokenKind::OpenDoubleBrace => self.parse_array(),
            TokenKind::OpenBrace => self.parse_table(true).map(AkoValue::Table),
            TokenKind::Semicolon | TokenKind::Boolean(_) | TokenKind::String(_) => {
                self.position += 1;
                Ok(literal_value(&token.kind))
            }
            TokenKind::Integer(_) | TokenKind::Float(_) => {
                let is_vector = matches!(
                    self.peek_nth(1).map(|t| &t.kind),
                    Some(TokenKind::VectorCross)
                );
                if is_vector {
                    self.parse_vector()
                } else {
                    self.position += 1;
                    Ok(literal_value(&token.kind))
                }
            }
            other => Err(Error::parse_at(
                format!("unsupported token {} in value position", other.describe()),
                token.start,
            )),
        }
    }

    fn parse_vector(&mut self) -> Result<AkoValue> {
        let first = self.peek().ok_or_else(|| self.unexpected_eof("a number"))?;
        let mut components = Vec::with_capacity(Vector::MAX_LEN);

        loop {
            let token = self.next_token().ok_or_else(|| {
                Error::parse_at("expected a number after vector delimiter", first.start)
            })?;
            match token.kind {
                TokenKind::Integer(i) => components.push(Number::Integer(i)),
                TokenKind::Float(f) => components.push(Number::Float(f)),
                _ if components.is_empty() => {
                    return Err(Self::unexpected(token, "a number"));
                }
                _ => {
                    return Err(Error::parse_at(
                        format!(
                            "expected a number after vector delimiter, found {}",
                            token.kind.describe()
                        ),
                        token.start,
                    ));
                }
            }

            if matches!(self.peek_kind(), Some(TokenKind::VectorCross)) {
                self.position += 1;
                continue;
            }
            break;
        }

        if components.len() > Vector::MAX_LEN {
            let end = self.last_consumed().map_or(first.end, |t| t.end);
            return Err(Error::parse_span(
                format!(
                    "vector size is greater than {} ({} components)",
                    Vector::MAX_LEN,
                    components.len()
                ),
                first.start,
                end,
            ));
        }

        log::trace!("vector of {} components at {}", components.len(), first.start);
        Vector::new(components).map(AkoValue::Vector)
    }

    fn parse_array(&mut self) -> Result<AkoValue> {
        match self.next_token() {
            Some(token) if token.kind == TokenKind::OpenDoubleBrace => {}
            Some(token) => return Err(Self::unexpected(token, "'[['")),
            None => return Err(self.unexpected_eof("'[['")),
        }

        let mut elements = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::CloseDoubleBrace) => {
                    self.position += 1;
                    return Ok(AkoValue::Array(elements));
                }
                Some(_) => elements.push(self.parse_value()?),
                None => return Err(self.unexpected_eof("closing ']]'")),
            }
        }
    }

    /// Parses table elements until the closing brace, or until end of input
    /// for a root table written without braces.
    fn parse_table(&mut self, braced: bool) -> Result<AkoMap> {
        if braced {
            match self.next_token() {
                Some(token) if token.kind == TokenKind::OpenBrace => {}
                Some(token) => return Err(Self::unexpected(token, "'['")),
                None => return Err(self.unexpected_eof("'['")),
            }
        }

        let mut table = AkoMap::new();
        while let Some(token) = self.peek() {
            if token.kind == TokenKind::CloseBrace {
                break;
            }
            if self.remaining() < 2 {
                return Err(Error::parse_at(
                    "expected two tokens for a table element, got only one",
                    token.start,
                ));
            }
            match token.kind {
                TokenKind::Identifier(_)
                | TokenKind::String(_)
                | TokenKind::Boolean(_)
                | TokenKind::Semicolon => {}
                _ => {
                    return Err(Self::unexpected(token, "an identifier, string, bool or null"));
                }
            }
            self.parse_table_element(&mut table)?;
        }

        if braced {
            match self.next_token() {
                Some(token) if token.kind == TokenKind::CloseBrace => {}
                Some(token) => return Err(Self::unexpected(token, "closing ']' for table")),
                None => return Err(self.unexpected_eof("closing ']' for table")),
            }
        } else if let Some(token) = self.peek() {
            return Err(Self::unexpected(token, "a table element"));
        }

        Ok(table)
    }

    fn parse_table_element(&mut self, table: &mut AkoMap) -> Result<()> {
        let value_first = match self.peek_kind() {
            Some(kind) if matches!(kind, TokenKind::Boolean(_) | TokenKind::Semicolon) => {
                self.position += 1;
                Some(literal_value(kind))
            }
            _ => None,
        };

        let start = self.peek().map(|t| t.start);
        let path = self.parse_key_path()?;
        let value = match value_first {
            Some(value) => value,
            None => self.parse_value()?,
        };

        let unresolved = || match start {
            Some(location) => Error::parse_at("failed to resolve table key", location),
            None => Error::parse("failed to resolve table key"),
        };
        let (last, parents) = path.split_last().ok_or_else(unresolved)?;

        log::trace!("assign {} = {:?}", path.join("."), value);
        let target = parents
            .iter()
            .try_fold(table, |current, key| current.table_entry(key.clone()))
            .ok_or_else(unresolved)?;
        target.insert(last.clone(), value);
        Ok(())
    }

    fn parse_key_path(&mut self) -> Result<Vec<String>> {
        let mut path = Vec::new();
        loop {
            let token = self
                .next_token()
                .ok_or_else(|| self.unexpected_eof("an identifier or string"))?;
            match &token.kind {
                TokenKind::Identifier(key) | TokenKind::String(key) => path.push(key.clone()),
                _ => return Err(Self::unexpected(token, "an identifier or string")),
            }

            if matches!(self.peek_kind(), Some(TokenKind::Dot)) {
                self.position += 1;
            } else {
                return Ok(path);
            }
        }
    }
}

fn literal_value(kind: &TokenKind) -> AkoValue {
    match kind {
        TokenKind::Boolean(b) => AkoValue::Bool(*b),
        TokenKind::Integer(i) => AkoValue::Number(Number::Integer(*i)),
        TokenKind::Float(f) => AkoValue::Number(Number::Float(*f)),
        TokenKind::String(s) | TokenKind::Identifier(s) => AkoValue::String(s.clone()),
        _ => AkoValue::Null,
    }
}
