//! Statement-level AST nodes: queries, SELECT and its clauses.

use crate::ast::expression::{Expr, RegexLiteral};
use crate::quote::quote_ident;
use smol_str::SmolStr;
use std::fmt;

/// A parsed query: zero or more statements separated by `;`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub statements: Vec<Statement>,
}

/// Top-level statement.
///
/// Only SELECT is parsed today; new statement kinds become new variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
}

/// `SELECT <fields> FROM <sources> [WHERE <condition>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Projected expressions; never empty after parsing.
    pub fields: Vec<Field>,
    /// Measurements to read from; never empty after parsing.
    pub sources: Vec<Source>,
    pub condition: Option<Expr>,
    /// False when any field contains a function call. Computed once at parse time.
    pub is_raw_query: bool,
}

/// A projected expression with an optional `AS` alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub expr: Expr,
    pub alias: Option<SmolStr>,
}

impl Field {
    pub fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }
}

/// A data source in a FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Measurement(Measurement),
}

/// A measurement reference, `[db.][rp.](name | /regex/)`.
///
/// Exactly one of `name` and `regex` selects the measurement. An empty
/// retention policy (as in `"db"..cpu`) means the database default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurement {
    pub database: Option<SmolStr>,
    pub retention_policy: Option<SmolStr>,
    pub name: Option<SmolStr>,
    pub regex: Option<RegexLiteral>,
}

impl Measurement {
    /// A plain measurement name without qualifiers.
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(";\n")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(select) => write!(f, "{select}"),
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        write_list(f, &self.fields)?;
        f.write_str(" FROM ")?;
        write_list(f, &self.sources)?;
        if let Some(condition) = &self.condition {
            write!(f, " WHERE {condition}")?;
        }
        Ok(())
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", quote_ident(&[alias.as_str()]))?;
        }
        Ok(())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Measurement(measurement) => write!(f, "{measurement}"),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(database) = &self.database {
            write!(f, "{}.", quote_ident(&[database.as_str()]))?;
        }
        if let Some(rp) = &self.retention_policy {
            if !rp.is_empty() || self.database.is_none() {
                f.write_str(&quote_ident(&[rp.as_str()]))?;
            }
        }
        if self.database.is_some() || self.retention_policy.is_some() {
            f.write_str(".")?;
        }
        match (&self.name, &self.regex) {
            (Some(name), _) => f.write_str(&quote_ident(&[name.as_str()])),
            (None, Some(regex)) => write!(f, "{regex}"),
            (None, None) => Ok(()),
        }
    }
}
