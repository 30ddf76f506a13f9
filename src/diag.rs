//! Parse error model and its bridge to miette reports.
//!
//! Every error is fatal to the parse call that produced it and is tied to a
//! source position. The `Display` form matches the classic InfluxQL wording,
//! `found X, expected a, b at line L, char C`, while the [`Diagnostic`] impl
//! lets callers render the error against the query text.

use crate::ast::Span;
use crate::lexer::token::{Pos, Token};
use miette::{Diagnostic, LabeledSpan, Report};
use std::fmt;

/// What went wrong, without the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An unexpected token, with the alternatives that would have been accepted.
    Unexpected { found: String, expected: Vec<String> },
    /// A free-form description.
    Message(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Unexpected { found, expected } => {
                write!(f, "found {found}, expected {}", expected.join(", "))
            }
            ParseErrorKind::Message(message) => f.write_str(message),
        }
    }
}

/// A positioned parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Zero-based line/character position.
    pub pos: Pos,
    /// Byte span of the offending text, used for report labels.
    pub span: Span,
}

impl ParseError {
    /// Creates a found/expected error at the given token.
    pub fn unexpected<I, S>(token: &Token, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ParseErrorKind::Unexpected {
                found: token.text(),
                expected: expected.into_iter().map(Into::into).collect(),
            },
            pos: token.pos,
            span: token.span.clone(),
        }
    }

    /// Creates a free-form error.
    pub fn message(message: impl Into<String>, pos: Pos, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::Message(message.into()),
            pos,
            span,
        }
    }

    /// Creates a free-form error at the given token.
    pub fn at_token(message: impl Into<String>, token: &Token) -> Self {
        Self::message(message, token.pos, token.span.clone())
    }

    /// Returns the free-form message, if this is a message error.
    pub fn message_text(&self) -> Option<&str> {
        match &self.kind {
            ParseErrorKind::Message(message) => Some(message),
            ParseErrorKind::Unexpected { .. } => None,
        }
    }

    /// Renders this error as a miette report with `source` attached.
    ///
    /// Out-of-range spans are clamped to the source bounds.
    pub fn to_report(&self, source: &str) -> Report {
        let mut error = self.clone();
        error.span = clamp_span(&self.span, source.len());
        Report::new(error).with_source_code(source.to_string())
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("influxql::parse"))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = (self.span.start, self.span.end.saturating_sub(self.span.start));
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

fn clamp_span(span: &Span, len: usize) -> Span {
    let start = span.start.min(len);
    let end = span.end.min(len).max(start);
    start..end
}
