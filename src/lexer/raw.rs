//! Raw token patterns recognized by the `logos` state machine.
//!
//! These are the context-free building blocks. Keyword lookup, positions,
//! whitespace coalescing and signed numbers are layered on top by
//! [`Scanner`](super::Scanner).

use logos::{Lexer, Logos};

/// Outcome of scanning a quoted string or identifier body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Quoted {
    /// Closing quote found; holds the unescaped value.
    Closed(String),
    /// An escape sequence that is not recognized; holds the escape text.
    BadEscape(String),
    /// Newline or end of input before the closing quote; holds the partial value.
    Unterminated(String),
}

/// Whether a numeric run turned out to carry a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumericKind {
    Integer,
    Float,
}

#[derive(Logos, Debug, Clone, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"--[^\n]*")]
    Comment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("\"", |lex| scan_quoted(lex, '"'))]
    QuotedIdent(Quoted),

    #[token("'", |lex| scan_quoted(lex, '\''))]
    Str(Quoted),

    #[regex(r"[0-9]+", scan_fraction)]
    Numeric(NumericKind),

    #[regex(r"\.[0-9]+")]
    Fraction,

    #[regex(r"\$[A-Za-z0-9_]*")]
    BoundParam,

    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("=")]
    Eq,
    #[token("!=")]
    #[token("<>")]
    NotEq,
    #[token("=~")]
    EqRegex,
    #[token("!~")]
    NotEqRegex,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
}

fn scan_quoted(lex: &mut Lexer<'_, RawToken>, quote: char) -> Quoted {
    let (consumed, quoted) = decode_quoted(lex.remainder(), quote);
    lex.bump(consumed);
    quoted
}

/// Decodes a quoted body that follows an opening `quote`.
///
/// Returns the number of bytes consumed (including the closing quote, when
/// present) together with the decoded result.
pub(crate) fn decode_quoted(rest: &str, quote: char) -> (usize, Quoted) {
    let mut value = String::new();
    let mut chars = rest.char_indices();
    while let Some((i, ch)) = chars.next() {
        if ch == quote {
            return (i + 1, Quoted::Closed(value));
        }
        match ch {
            '\n' => return (i, Quoted::Unterminated(value)),
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, '"')) => value.push('"'),
                Some((_, '\'')) => value.push('\''),
                Some((j, other)) => {
                    return (j + other.len_utf8(), Quoted::BadEscape(format!("\\{other}")));
                }
                None => break,
            },
            _ => value.push(ch),
        }
    }
    (rest.len(), Quoted::Unterminated(value))
}

fn scan_fraction(lex: &mut Lexer<'_, RawToken>) -> NumericKind {
    let rest = lex.remainder().as_bytes();
    if rest.len() < 2 || rest[0] != b'.' || !rest[1].is_ascii_digit() {
        return NumericKind::Integer;
    }
    let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    lex.bump(1 + digits);
    NumericKind::Float
}
