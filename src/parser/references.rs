//! Identifier and dotted reference parsing.
//!
//! # Grammar Overview
//!
//! ```text
//! segmented_idents ::= ident ( "." [ ident ] )*
//! ```
//!
//! At most three segments are allowed (`db.rp.name`). A segment may be empty,
//! as in `"db"..cpu`, and segmentation stops before a `/` (a trailing regex)
//! or a `:` so the caller can handle what follows.

use crate::diag::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::base::{ParseResult, TokenStream};
use crate::quote::quote_ident;
use smol_str::SmolStr;

const MAX_SEGMENTS: usize = 3;

/// Parses a single identifier, skipping leading whitespace.
pub(crate) fn parse_ident(stream: &mut TokenStream<'_>) -> ParseResult<SmolStr> {
    expect_ident(stream).map(|token| token.lit)
}

pub(crate) fn expect_ident(stream: &mut TokenStream<'_>) -> ParseResult<Token> {
    let token = stream.scan_ignore_whitespace();
    if token.kind != TokenKind::Ident {
        return Err(stream.unexpected(&token, &["identifier"]));
    }
    Ok(token)
}

/// Parses up to three dot-separated identifiers.
pub(crate) fn parse_segmented_idents(stream: &mut TokenStream<'_>) -> ParseResult<Vec<SmolStr>> {
    let first = expect_ident(stream)?;
    continue_segmented_idents(stream, first)
}

/// Parses the remaining segments after `first` has already been consumed.
pub(crate) fn continue_segmented_idents(
    stream: &mut TokenStream<'_>,
    first: Token,
) -> ParseResult<Vec<SmolStr>> {
    let mut end = first.span.end;
    let mut idents = vec![first.lit.clone()];

    loop {
        let dot = stream.scan();
        if dot.kind != TokenKind::Dot {
            stream.unscan();
            break;
        }
        end = dot.span.end;

        match stream.peek_char() {
            Some('/') | Some(':') => break,
            Some('.') => {
                idents.push(SmolStr::default());
                continue;
            }
            _ => {}
        }

        let ident = expect_ident(stream)?;
        end = ident.span.end;
        idents.push(ident.lit);
    }

    if idents.len() > MAX_SEGMENTS {
        return Err(ParseError::message(
            format!("too many segments in {}", quote_ident(&idents)),
            first.pos,
            first.span.start..end,
        ));
    }
    Ok(idents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::params::Params;

    fn segments(source: &str) -> ParseResult<Vec<SmolStr>> {
        let params = Params::new();
        let mut stream = TokenStream::new(source, &params);
        parse_segmented_idents(&mut stream)
    }

    #[test]
    fn single_and_dotted_segments() {
        assert_eq!(segments("cpu").unwrap(), vec!["cpu"]);
        assert_eq!(segments("db.rp.cpu").unwrap(), vec!["db", "rp", "cpu"]);
        assert_eq!(
            segments(r#""my db"."rp".cpu"#).unwrap(),
            vec!["my db", "rp", "cpu"]
        );
    }

    #[test]
    fn empty_middle_segment() {
        assert_eq!(segments(r#""db"..cpu"#).unwrap(), vec!["db", "", "cpu"]);
    }

    #[test]
    fn stops_before_regex_and_colon() {
        let params = Params::new();
        let mut stream = TokenStream::new("rp./cpu.*/", &params);
        assert_eq!(parse_segmented_idents(&mut stream).unwrap(), vec!["rp"]);
        assert_eq!(stream.peek_char(), Some('/'));

        let mut stream = TokenStream::new("a.:b", &params);
        assert_eq!(parse_segmented_idents(&mut stream).unwrap(), vec!["a"]);
        assert_eq!(stream.peek_char(), Some(':'));
    }

    #[test]
    fn too_many_segments_points_at_first_segment() {
        let err = segments("  a.b.c.d").unwrap_err();
        assert_eq!(
            err.to_string(),
            "too many segments in \"a\".\"b\".\"c\".d at line 1, char 3"
        );
        assert_eq!(err.span, 2..9);
    }

    #[test]
    fn requires_identifier() {
        let err = segments("1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "found 1, expected identifier at line 1, char 1"
        );
        let err = segments("a.").unwrap_err();
        assert_eq!(
            err.to_string(),
            "found EOF, expected identifier at line 1, char 3"
        );
    }
}
