//! Lexical analysis for InfluxQL.
//!
//! The [`Scanner`] produces one [`Token`] at a time on demand. It has to be
//! incremental rather than batch: a `/` is a division operator in ordinary
//! lexing but opens a regex literal when the grammar asks for one, so the
//! parser switches modes through [`Scanner::scan_regex`].

pub mod keywords;
mod raw;
pub mod token;

use crate::ast::Span;
use logos::Logos;
use raw::{NumericKind, Quoted, RawToken};
use smol_str::SmolStr;
use token::{Pos, Token, TokenKind};

/// Maps byte offsets to zero-based line/character positions.
#[derive(Debug, Clone)]
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    fn pos(&self, source: &str, offset: usize) -> Pos {
        let line = self.starts.partition_point(|&start| start <= offset) - 1;
        let char = source[self.starts[line]..offset].chars().count();
        Pos::new(line, char)
    }
}

/// An on-demand InfluxQL scanner.
pub struct Scanner<'a> {
    /// The full source text.
    source: &'a str,
    /// Raw lexer over `source[base..]`.
    lexer: logos::Lexer<'a, RawToken>,
    /// Byte offset of the raw lexer's input within `source`.
    base: usize,
    lines: LineIndex,
    /// Kind of the last non-whitespace token, used to tell a sign apart
    /// from a binary operator.
    last: Option<TokenKind>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: RawToken::lexer(source),
            base: 0,
            lines: LineIndex::new(source),
            last: None,
        }
    }

    /// Returns the source text being scanned.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.base + self.lexer.span().end
    }

    /// Converts a byte offset into a line/character position.
    pub fn pos_at(&self, offset: usize) -> Pos {
        self.lines.pos(self.source, offset)
    }

    /// Returns the next unread character without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.source[self.offset()..].chars().next()
    }

    /// Repositions the scanner so the next token starts at `offset`.
    pub fn rewind(&mut self, offset: usize) {
        self.lexer = RawToken::lexer(&self.source[offset..]);
        self.base = offset;
    }

    /// Scans the next token.
    ///
    /// Runs of whitespace and `--` comments come back as a single [`TokenKind::Ws`].
    pub fn scan(&mut self) -> Token {
        let source = self.source;
        let start = self.offset();
        let Some(raw) = self.lexer.next() else {
            return self.token(TokenKind::Eof, "", start..start);
        };
        let span = self.raw_span();
        let text = source.get(span.clone()).unwrap_or_default();

        let token = match raw {
            Ok(RawToken::Whitespace | RawToken::Comment) => {
                self.skip_trivia();
                let end = self.offset();
                return self.token(TokenKind::Ws, &source[span.start..end], span.start..end);
            }
            Ok(RawToken::Ident) => match keywords::lookup_keyword(text) {
                Some(kind) => self.token(kind, "", span),
                None => self.token(TokenKind::Ident, text, span),
            },
            Ok(RawToken::QuotedIdent(quoted)) => self.quoted(TokenKind::Ident, quoted, span),
            Ok(RawToken::Str(quoted)) => self.quoted(TokenKind::String, quoted, span),
            Ok(RawToken::Numeric(NumericKind::Integer)) => {
                self.token(TokenKind::Integer, text, span)
            }
            Ok(RawToken::Numeric(NumericKind::Float) | RawToken::Fraction) => {
                self.token(TokenKind::Number, text, span)
            }
            Ok(RawToken::BoundParam) => self.token(TokenKind::BoundParam, text, span),
            Ok(RawToken::Add) => self.sign_or_operator(TokenKind::Add, span),
            Ok(RawToken::Sub) => self.sign_or_operator(TokenKind::Sub, span),
            Ok(other) => self.token(punctuation_kind(&other), "", span),
            Err(()) => {
                // Illegal tokens are exactly one character wide.
                let width = source[span.start..].chars().next().map_or(0, char::len_utf8);
                let end = span.start + width;
                if end != span.end {
                    self.rewind(end);
                }
                self.token(TokenKind::Illegal, &source[span.start..end], span.start..end)
            }
        };
        self.last = Some(token.kind);
        token
    }

    /// Scans a `/`-delimited regex literal starting at the next character.
    ///
    /// `\/` decodes to `/`; every other escape is passed through untouched so
    /// the regex engine sees it. If the next character is not `/` this falls
    /// back to an ordinary [`scan`](Self::scan).
    pub fn scan_regex(&mut self) -> Token {
        let source = self.source;
        let start = self.offset();
        let Some(body) = source[start..].strip_prefix('/') else {
            return self.scan();
        };

        let mut pattern = String::new();
        let mut chars = body.char_indices();
        let (len, kind) = loop {
            match chars.next() {
                None => break (body.len(), TokenKind::BadRegex),
                Some((i, '/')) => break (i + 1, TokenKind::Regex),
                Some((_, '\\')) => match chars.next() {
                    Some((_, '/')) => pattern.push('/'),
                    Some((_, ch)) => {
                        pattern.push('\\');
                        pattern.push(ch);
                    }
                    None => break (body.len(), TokenKind::BadEscape),
                },
                Some((_, ch)) => pattern.push(ch),
            }
        };

        let end = start + 1 + len;
        self.rewind(end);
        self.last = Some(kind);
        let lit = match kind {
            TokenKind::BadEscape => SmolStr::new_inline("\\"),
            _ => SmolStr::from(pattern),
        };
        self.token(kind, lit, start..end)
    }

    fn raw_span(&self) -> Span {
        let span = self.lexer.span();
        self.base + span.start..self.base + span.end
    }

    fn token(&self, kind: TokenKind, lit: impl Into<SmolStr>, span: Span) -> Token {
        Token::new(kind, lit, self.pos_at(span.start), span)
    }

    fn quoted(&self, kind: TokenKind, quoted: Quoted, span: Span) -> Token {
        match quoted {
            Quoted::Closed(value) => self.token(kind, value, span),
            Quoted::BadEscape(escape) => self.token(TokenKind::BadEscape, escape, span),
            Quoted::Unterminated(value) => self.token(TokenKind::BadString, value, span),
        }
    }

    /// Consumes any whitespace or comments directly following the current token.
    fn skip_trivia(&mut self) {
        loop {
            let mut ahead = self.lexer.clone();
            match ahead.next() {
                Some(Ok(RawToken::Whitespace | RawToken::Comment)) => self.lexer = ahead,
                _ => break,
            }
        }
    }

    /// Folds a `+`/`-` into an adjacent number when it cannot be a binary operator.
    fn sign_or_operator(&mut self, operator: TokenKind, span: Span) -> Token {
        let source = self.source;
        let rest = source[span.end..].as_bytes();
        let starts_number = match rest {
            [b'0'..=b'9', ..] => true,
            [b'.', b'0'..=b'9', ..] => true,
            _ => false,
        };
        if !starts_number || self.last.is_some_and(ends_operand) {
            return self.token(operator, "", span);
        }

        let kind = match self.lexer.next() {
            Some(Ok(RawToken::Numeric(NumericKind::Integer))) => TokenKind::Integer,
            _ => TokenKind::Number,
        };
        let end = self.offset();
        self.token(kind, &source[span.start..end], span.start..end)
    }
}

/// Returns true if a token of this kind can be the last token of an operand.
fn ends_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident
            | TokenKind::Number
            | TokenKind::Integer
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::BoundParam
            | TokenKind::Regex
            | TokenKind::RParen
    )
}

fn punctuation_kind(raw: &RawToken) -> TokenKind {
    match raw {
        RawToken::Mul => TokenKind::Mul,
        RawToken::Div => TokenKind::Div,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::EqRegex => TokenKind::EqRegex,
        RawToken::NotEqRegex => TokenKind::NotEqRegex,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Dot => TokenKind::Dot,
        _ => TokenKind::Illegal,
    }
}

/// Scans the whole source into tokens, ending with (and including) EOF.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
