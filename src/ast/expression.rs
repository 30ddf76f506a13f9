//! Expression AST nodes for InfluxQL.
//!
//! Expressions appear in SELECT fields, function arguments and WHERE
//! conditions. Nodes carry no source spans: once a statement is parsed the
//! tree is a plain value, and diagnostics are produced during parsing.

use crate::lexer::token::TokenKind;
use crate::quote::{quote_ident, quote_string};
use regex::Regex;
use smol_str::SmolStr;
use std::fmt;

// ============================================================================
// Expr - Top-level expression type
// ============================================================================

/// Any InfluxQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a field or tag, optionally with a declared type.
    VarRef(VarRef),

    /// Single-quoted string literal.
    StringLiteral(String),

    /// Floating point literal.
    NumberLiteral(f64),

    /// Integer literal.
    IntegerLiteral(i64),

    /// `true` or `false`.
    BooleanLiteral(bool),

    /// `/pattern/` literal, compiled at parse time.
    RegexLiteral(RegexLiteral),

    /// Function call such as `mean(value)`.
    Call(Call),

    /// Binary operation.
    Binary(BinaryExpr),

    /// Parenthesized expression.
    Paren(Box<Expr>),
}

impl Expr {
    /// Returns true if this expression or any of its children is a call.
    pub fn contains_call(&self) -> bool {
        crate::ast::visit::inspect_exprs(self, |expr| match expr {
            Expr::Call(_) => std::ops::ControlFlow::Break(()),
            _ => std::ops::ControlFlow::Continue(()),
        })
        .is_break()
    }
}

// ============================================================================
// Variable references
// ============================================================================

/// Declared type of a variable reference (`value::float`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// No `::type` suffix was given.
    #[default]
    Unknown,
    Float,
    Integer,
    String,
    Boolean,
}

impl DataType {
    /// Looks up a type by the name used after `::` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "float" => Some(DataType::Float),
            "integer" => Some(DataType::Integer),
            "string" => Some(DataType::String),
            "boolean" => Some(DataType::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Unknown => "unknown",
            DataType::Float => "float",
            DataType::Integer => "integer",
            DataType::String => "string",
            DataType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// A reference to a field or tag.
///
/// Dotted references keep their segments joined with `.` in `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarRef {
    pub name: SmolStr,
    pub data_type: DataType,
}

impl VarRef {
    /// Creates an untyped reference.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::Unknown,
        }
    }

    /// Creates a reference with a declared type.
    pub fn typed(name: impl Into<SmolStr>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

// ============================================================================
// Literals and calls
// ============================================================================

/// A compiled regular expression literal.
///
/// Two literals are equal when their patterns are textually equal.
#[derive(Debug, Clone)]
pub struct RegexLiteral(pub Regex);

impl RegexLiteral {
    /// Returns the pattern source.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for RegexLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl From<Regex> for RegexLiteral {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

/// Function call. The name is always lower-case.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: SmolStr,
    pub args: Vec<Expr>,
}

// ============================================================================
// Binary expressions
// ============================================================================

/// Binary operators, from loosest (`OR`) to tightest (`*`, `/`) binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Eq,
    NotEq,
    EqRegex,
    NotEqRegex,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOperator {
    /// Maps an operator token onto its operator, if it is one.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Add => BinaryOperator::Add,
            TokenKind::Sub => BinaryOperator::Sub,
            TokenKind::Mul => BinaryOperator::Mul,
            TokenKind::Div => BinaryOperator::Div,
            TokenKind::And => BinaryOperator::And,
            TokenKind::Or => BinaryOperator::Or,
            TokenKind::Eq => BinaryOperator::Eq,
            TokenKind::NotEq => BinaryOperator::NotEq,
            TokenKind::EqRegex => BinaryOperator::EqRegex,
            TokenKind::NotEqRegex => BinaryOperator::NotEqRegex,
            TokenKind::Lt => BinaryOperator::Lt,
            TokenKind::LtEq => BinaryOperator::LtEq,
            TokenKind::Gt => BinaryOperator::Gt,
            TokenKind::GtEq => BinaryOperator::GtEq,
            _ => return None,
        };
        Some(op)
    }

    /// The token this operator is spelled with.
    pub fn token(self) -> TokenKind {
        match self {
            BinaryOperator::Add => TokenKind::Add,
            BinaryOperator::Sub => TokenKind::Sub,
            BinaryOperator::Mul => TokenKind::Mul,
            BinaryOperator::Div => TokenKind::Div,
            BinaryOperator::And => TokenKind::And,
            BinaryOperator::Or => TokenKind::Or,
            BinaryOperator::Eq => TokenKind::Eq,
            BinaryOperator::NotEq => TokenKind::NotEq,
            BinaryOperator::EqRegex => TokenKind::EqRegex,
            BinaryOperator::NotEqRegex => TokenKind::NotEqRegex,
            BinaryOperator::Lt => TokenKind::Lt,
            BinaryOperator::LtEq => TokenKind::LtEq,
            BinaryOperator::Gt => TokenKind::Gt,
            BinaryOperator::GtEq => TokenKind::GtEq,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        self.token().precedence()
    }

    /// Returns true for comparison and boolean operators, which only make
    /// sense in a WHERE clause.
    pub fn is_condition_operator(self) -> bool {
        !matches!(
            self,
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token(), f)
    }
}

/// `lhs op rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOperator,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(op: BinaryOperator, lhs: Expr, rhs: Expr) -> Self {
        Self {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::VarRef(var_ref) => fmt::Display::fmt(var_ref, f),
            Expr::StringLiteral(value) => f.write_str(&quote_string(value)),
            Expr::NumberLiteral(value) => write_number(f, *value),
            Expr::IntegerLiteral(value) => write!(f, "{value}"),
            Expr::BooleanLiteral(value) => write!(f, "{value}"),
            Expr::RegexLiteral(regex) => fmt::Display::fmt(regex, f),
            Expr::Call(call) => fmt::Display::fmt(call, f),
            Expr::Binary(binary) => fmt::Display::fmt(binary, f),
            Expr::Paren(inner) => write!(f, "({inner})"),
        }
    }
}

// Integral floats keep a fractional digit so they re-lex as numbers.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for VarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_ident(&[self.name.as_str()]))?;
        if self.data_type != DataType::Unknown {
            write!(f, "::{}", self.data_type)?;
        }
        Ok(())
    }
}

impl fmt::Display for RegexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str().replace('/', "\\/"))
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", quote_ident(&[self.name.as_str()]))?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(arg, f)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}
