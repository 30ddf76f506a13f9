//! Shared parser infrastructure for token stream navigation.
//!
//! Every production works against a [`TokenStream`], which pulls tokens from
//! the scanner on demand and can push back exactly one of them.

use crate::diag::ParseError;
use crate::lexer::Scanner;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::params::{ParamValue, Params};

/// Common result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Token stream navigator with a single-token pushback buffer.
pub struct TokenStream<'a> {
    scanner: Scanner<'a>,
    /// Token pushed back by [`unscan`](Self::unscan), returned by the next scan.
    pending: Option<Token>,
    /// Most recently scanned token, eligible for pushback.
    prev: Option<Token>,
    params: &'a Params,
}

impl<'a> TokenStream<'a> {
    /// Creates a token stream over `source` that binds parameters from `params`.
    pub fn new(source: &'a str, params: &'a Params) -> Self {
        Self {
            scanner: Scanner::new(source),
            pending: None,
            prev: None,
            params,
        }
    }

    /// Returns the next token, whitespace included.
    pub fn scan(&mut self) -> Token {
        let token = match self.pending.take() {
            Some(token) => token,
            None => self.scanner.scan(),
        };
        self.prev = Some(token.clone());
        token
    }

    /// Pushes the last scanned token back. Only one level of pushback exists;
    /// a second call before the next scan does nothing.
    pub fn unscan(&mut self) {
        if let Some(token) = self.prev.take() {
            self.pending = Some(token);
        }
    }

    /// Returns the next token, skipping one whitespace token if present.
    pub fn scan_ignore_whitespace(&mut self) -> Token {
        let token = self.scan();
        if token.kind == TokenKind::Ws {
            return self.scan();
        }
        token
    }

    /// Consumes the next token if it is whitespace.
    pub fn consume_whitespace(&mut self) {
        if self.scan().kind != TokenKind::Ws {
            self.unscan();
        }
    }

    /// Scans a regex literal at the current position.
    ///
    /// A pushed-back token is discarded and its text rescanned in regex mode,
    /// so a `/` first read as division can still open a regex.
    pub fn scan_regex(&mut self) -> Token {
        if let Some(token) = self.pending.take() {
            self.scanner.rewind(token.span.start);
        }
        let token = self.scanner.scan_regex();
        self.prev = Some(token.clone());
        token
    }

    /// Returns the next source character without consuming anything.
    pub fn peek_char(&self) -> Option<char> {
        match &self.pending {
            Some(token) if token.kind == TokenKind::Eof => None,
            Some(token) => self.scanner.source()[token.span.start..].chars().next(),
            None => self.scanner.peek_char(),
        }
    }

    /// Looks up a bound parameter by name (without the `$`).
    pub fn param(&self, name: &str) -> Option<&'a ParamValue> {
        self.params.get(name)
    }

    /// Creates a found/expected error for `token`.
    pub fn unexpected(&self, token: &Token, expected: &[&str]) -> ParseError {
        ParseError::unexpected(token, expected.iter().copied())
    }
}
