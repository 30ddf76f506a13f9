//! AST foundation types and node structures.

pub mod expression;
mod span;
pub mod statement;
pub mod visit;
mod visit_macros;
pub mod visit_mut;

// Re-export span types
pub use span::Span;

// Re-export node types
pub use expression::{BinaryExpr, BinaryOperator, Call, DataType, Expr, RegexLiteral, VarRef};
pub use statement::{Field, Measurement, Query, SelectStatement, Source, Statement};

// Re-export traversal API
pub use visit::{Visit, VisitResult, inspect_exprs};
pub use visit_mut::VisitMut;
