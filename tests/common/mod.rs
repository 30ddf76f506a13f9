//! Common test utilities
//!
//! Shared helpers used across the integration test crates.
//!
//! # Parsing Helpers
//! - [`parse_cleanly`] - Parse a query, panicking with a rendered report on failure
//! - [`select`] - Parse a single SELECT statement
//! - [`parse_error`] - Parse a query that must fail and return its error text
//!
//! # Builders
//! - [`var`] and [`binary`] build expected expression trees

#![allow(dead_code)]

use influxql_parser::{
    BinaryExpr, BinaryOperator, Expr, ParseError, Query, SelectStatement, Statement, VarRef,
    parse_query,
};

/// Render an error against its source for assertion messages.
pub fn format_error(source: &str, err: &ParseError) -> String {
    format!("{:?}", err.to_report(source))
}

/// Parse `source`, panicking with the rendered diagnostic if it fails.
pub fn parse_cleanly(source: &str) -> Query {
    match parse_query(source) {
        Ok(query) => query,
        Err(err) => panic!(
            "unexpected error for `{source}`:\n{}",
            format_error(source, &err)
        ),
    }
}

/// Parse `source` as a query holding exactly one SELECT statement.
pub fn select(source: &str) -> SelectStatement {
    let mut query = parse_cleanly(source);
    assert_eq!(query.statements.len(), 1, "expected one statement in `{source}`");
    match query.statements.remove(0) {
        Statement::Select(select) => select,
    }
}

/// Parse `source`, expecting failure, and return the error's display text.
pub fn parse_error(source: &str) -> String {
    match parse_query(source) {
        Ok(query) => panic!("expected `{source}` to fail, parsed as `{query}`"),
        Err(err) => err.to_string(),
    }
}

pub fn var(name: &str) -> Expr {
    Expr::VarRef(VarRef::new(name))
}

pub fn binary(op: BinaryOperator, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary(BinaryExpr::new(op, lhs, rhs))
}
