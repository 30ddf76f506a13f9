//! Parser infrastructure for InfluxQL syntax.
//!
//! The parser pulls tokens from the scanner on demand and builds the AST by
//! recursive descent. Any error ends the parse: the caller receives either a
//! complete tree or a single positioned [`ParseError`].

mod base;
mod expression;
pub mod params;
mod program;
mod query;
mod references;

pub use base::ParseResult;
pub use params::{ParamValue, Params};

use crate::ast::{Expr, Query, Statement};
use crate::diag::ParseError;
use base::TokenStream;

/// InfluxQL parser over a source string and a set of bound parameters.
pub struct Parser<'source> {
    source: &'source str,
    params: Params,
}

impl<'source> Parser<'source> {
    /// Creates a parser with no bound parameters.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            params: Params::new(),
        }
    }

    /// Replaces the parameters bound to `$name` references.
    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    /// Builder form of [`set_params`](Self::set_params).
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Parses every `;`-separated statement in the source.
    pub fn parse_query(&self) -> ParseResult<Query> {
        let mut stream = TokenStream::new(self.source, &self.params);
        let query = program::parse_query(&mut stream).inspect_err(log_failure)?;
        tracing::debug!(statements = query.statements.len(), "parsed query");
        Ok(query)
    }

    /// Parses a single statement. Input after the statement is not examined.
    pub fn parse_statement(&self) -> ParseResult<Statement> {
        let mut stream = TokenStream::new(self.source, &self.params);
        program::parse_statement(&mut stream).inspect_err(log_failure)
    }

    /// Parses a single expression. Input after the expression is not examined.
    pub fn parse_expr(&self) -> ParseResult<Expr> {
        let mut stream = TokenStream::new(self.source, &self.params);
        expression::parse_expr(&mut stream).inspect_err(log_failure)
    }
}

fn log_failure(err: &ParseError) {
    tracing::debug!(error = %err, "parse failed");
}
