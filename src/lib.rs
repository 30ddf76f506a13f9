//! InfluxQL SELECT parser with positioned diagnostics.
//!
//! This library turns InfluxQL query text into a typed AST. Errors carry the
//! line and character of the offending token and can be rendered with miette.
//! Every AST node prints back as InfluxQL that parses to the same tree.
//!
//! # Example
//!
//! ```
//! use influxql_parser::{parse_query, Expr, Source, Statement};
//!
//! let query = parse_query("SELECT mean(value) FROM telegraf.autogen.cpu WHERE host = 'a'").unwrap();
//! assert_eq!(query.statements.len(), 1);
//!
//! let Statement::Select(select) = &query.statements[0];
//! assert!(!select.is_raw_query);
//! assert!(matches!(select.fields[0].expr, Expr::Call(_)));
//!
//! let Source::Measurement(m) = &select.sources[0];
//! assert_eq!(m.database.as_deref(), Some("telegraf"));
//! assert_eq!(m.name.as_deref(), Some("cpu"));
//!
//! // Errors report where parsing stopped.
//! let err = parse_query("SELECT value FROM").unwrap_err();
//! assert_eq!(err.to_string(), "found EOF, expected identifier at line 1, char 18");
//! ```

pub mod ast;
pub mod diag;
pub mod lexer;
pub mod parser;
mod quote;
pub mod semantic;

// Re-export AST node types.
pub use ast::{
    BinaryExpr, BinaryOperator, Call, DataType, Expr, Field, Measurement, Query, RegexLiteral,
    SelectStatement, Source, Span, Statement, VarRef,
};

// Re-export lexer and diagnostic types for convenience.
pub use diag::{ParseError, ParseErrorKind};
pub use lexer::token::{Pos, Token, TokenKind};
pub use lexer::{Scanner, tokenize};
pub use parser::{ParamValue, Params, ParseResult, Parser};
pub use quote::{ident_needs_quotes, quote_ident, quote_string};
pub use semantic::SemanticError;

/// Parses `source` as a `;`-separated list of statements.
pub fn parse_query(source: &str) -> ParseResult<Query> {
    Parser::new(source).parse_query()
}

/// Parses a single statement from the start of `source`.
pub fn parse_statement(source: &str) -> ParseResult<Statement> {
    Parser::new(source).parse_statement()
}

/// Parses a single expression from the start of `source`.
pub fn parse_expr(source: &str) -> ParseResult<Expr> {
    Parser::new(source).parse_expr()
}
