//! SELECT statement parsing.
//!
//! # Grammar Overview
//!
//! ```text
//! select_stmt ::= SELECT fields FROM sources [ WHERE expr ]
//! fields      ::= field ( "," field )*
//! field       ::= expr [ AS ident ]
//! sources     ::= source ( "," source )*
//! source      ::= regex | segmented_idents [ "." regex ]
//! ```

use std::ops::ControlFlow;

use crate::ast::{BinaryOperator, Expr, Field, Measurement, SelectStatement, Source, inspect_exprs};
use crate::diag::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::base::{ParseResult, TokenStream};
use crate::parser::expression::{parse_expr, parse_regex};
use crate::parser::references::{parse_ident, parse_segmented_idents};
use smol_str::SmolStr;

/// Parses a SELECT statement whose `SELECT` keyword is `select`.
pub(crate) fn parse_select_statement(
    stream: &mut TokenStream<'_>,
    select: &Token,
) -> ParseResult<SelectStatement> {
    let fields = parse_fields(stream)?;

    let from = stream.scan_ignore_whitespace();
    if from.kind != TokenKind::From {
        return Err(stream.unexpected(&from, &["FROM"]));
    }
    let sources = parse_sources(stream)?;
    let condition = parse_condition(stream)?;

    let is_raw_query = !fields.iter().any(|field| field.expr.contains_call());
    let statement = SelectStatement {
        fields,
        sources,
        condition,
        is_raw_query,
    };

    statement
        .validate()
        .map_err(|err| ParseError::at_token(err.to_string(), select))?;
    Ok(statement)
}

/// Parses one or more comma-separated fields.
fn parse_fields(stream: &mut TokenStream<'_>) -> ParseResult<Vec<Field>> {
    let mut fields = Vec::new();
    loop {
        fields.push(parse_field(stream)?);

        if stream.scan().kind != TokenKind::Comma {
            stream.unscan();
            return Ok(fields);
        }
    }
}

fn parse_field(stream: &mut TokenStream<'_>) -> ParseResult<Field> {
    let start = stream.scan_ignore_whitespace();
    stream.unscan();

    let expr = parse_expr(stream)?;
    if let Some(op) = find_condition_operator(&expr) {
        return Err(ParseError::at_token(
            format!(
                "invalid operator {op} in SELECT clause; operator is intended for WHERE clause"
            ),
            &start,
        ));
    }

    let alias = parse_alias(stream)?;
    stream.consume_whitespace();

    Ok(Field { expr, alias })
}

/// Returns the first comparison or boolean operator found in `expr`.
fn find_condition_operator(expr: &Expr) -> Option<BinaryOperator> {
    let flow = inspect_exprs(expr, |expr| match expr {
        Expr::Binary(binary) if binary.op.is_condition_operator() => ControlFlow::Break(binary.op),
        _ => ControlFlow::Continue(()),
    });
    match flow {
        ControlFlow::Break(op) => Some(op),
        ControlFlow::Continue(()) => None,
    }
}

fn parse_alias(stream: &mut TokenStream<'_>) -> ParseResult<Option<SmolStr>> {
    if stream.scan_ignore_whitespace().kind != TokenKind::As {
        stream.unscan();
        return Ok(None);
    }
    parse_ident(stream).map(Some)
}

/// Parses one or more comma-separated sources.
fn parse_sources(stream: &mut TokenStream<'_>) -> ParseResult<Vec<Source>> {
    let mut sources = Vec::new();
    loop {
        sources.push(parse_source(stream)?);

        if stream.scan_ignore_whitespace().kind != TokenKind::Comma {
            stream.unscan();
            return Ok(sources);
        }
    }
}

fn parse_source(stream: &mut TokenStream<'_>) -> ParseResult<Source> {
    // A bare regex selects measurements by pattern and ends the source.
    if let Some(regex) = parse_regex(stream)? {
        return Ok(Source::Measurement(Measurement {
            regex: Some(regex),
            ..Measurement::default()
        }));
    }

    let mut idents = parse_segmented_idents(stream)?;
    if idents.len() == 3 {
        let name = idents.pop();
        let retention_policy = idents.pop();
        let database = idents.pop();
        return Ok(Source::Measurement(Measurement {
            database,
            retention_policy,
            name,
            regex: None,
        }));
    }

    // Fewer segments may still be followed by a regex, which shifts the
    // segments one qualifier to the left.
    let regex = parse_regex(stream)?;
    let mut idents = idents.into_iter();
    let first = idents.next();
    let measurement = match (idents.next(), regex) {
        (None, None) => Measurement {
            name: first,
            ..Measurement::default()
        },
        (None, Some(regex)) => Measurement {
            retention_policy: first,
            regex: Some(regex),
            ..Measurement::default()
        },
        (Some(name), None) => Measurement {
            retention_policy: first,
            name: Some(name),
            ..Measurement::default()
        },
        (Some(retention_policy), Some(regex)) => Measurement {
            database: first,
            retention_policy: Some(retention_policy),
            name: None,
            regex: Some(regex),
        },
    };

    Ok(Source::Measurement(measurement))
}

/// Parses an optional `WHERE <expr>` clause.
fn parse_condition(stream: &mut TokenStream<'_>) -> ParseResult<Option<Expr>> {
    if stream.scan_ignore_whitespace().kind != TokenKind::Where {
        stream.unscan();
        return Ok(None);
    }
    parse_expr(stream).map(Some)
}
