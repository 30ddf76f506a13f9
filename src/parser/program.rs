//! Query and statement dispatch.
//!
//! # Grammar Overview
//!
//! ```text
//! query     ::= [ statement ] ( ";" [ statement ] )*
//! statement ::= select_stmt
//! ```

use crate::ast::{Query, Statement};
use crate::lexer::token::TokenKind;
use crate::parser::base::{ParseResult, TokenStream};
use crate::parser::query::parse_select_statement;

/// Parses every statement up to end of input.
///
/// Statements are separated by `;`. Empty statements between separators are
/// skipped, and two statements with no `;` between them are an error.
pub(crate) fn parse_query(stream: &mut TokenStream<'_>) -> ParseResult<Query> {
    let mut statements = Vec::new();
    let mut separated = true;

    loop {
        let token = stream.scan_ignore_whitespace();
        match token.kind {
            TokenKind::Eof => return Ok(Query { statements }),
            TokenKind::Semicolon => separated = true,
            _ if !separated => return Err(stream.unexpected(&token, &[";"])),
            _ => {
                stream.unscan();
                let statement = parse_statement(stream)?;
                tracing::trace!(index = statements.len(), "parsed statement");
                statements.push(statement);
                separated = false;
            }
        }
    }
}

/// Parses a single statement at the current position.
pub(crate) fn parse_statement(stream: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let token = stream.scan_ignore_whitespace();
    match token.kind {
        TokenKind::Select => parse_select_statement(stream, &token).map(Statement::Select),
        _ => Err(stream.unexpected(&token, &["SELECT"])),
    }
}
