//! Semantic checks applied to a SELECT statement after it has been parsed.
//!
//! The checks cover aggregate usage in the field list:
//! - aggregate calls may not be mixed with raw field references
//! - aggregate calls must receive the number of arguments they accept
//!
//! `DISTINCT` is a reserved word, so a `distinct` aggregate only reaches
//! these checks when written as the quoted identifier `"distinct"(x)`.
//!
//! [`SelectStatement::validate`] is run by the parser on every statement, so
//! a tree returned from [`crate::parse_query`] has already passed it.

use std::ops::ControlFlow;

use thiserror::Error;

use crate::ast::visit::{Visit, walk_expr};
use crate::ast::{Call, Expr, SelectStatement};

/// Functions that collapse many points into one value.
const AGGREGATES: &[&str] = &[
    "count",
    "distinct",
    "first",
    "last",
    "max",
    "mean",
    "median",
    "min",
    "mode",
    "spread",
    "stddev",
    "sum",
    "percentile",
];

/// Returns true if `name` is an aggregate function name.
pub fn is_aggregate(name: &str) -> bool {
    AGGREGATES.contains(&name)
}

/// Categories of semantic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// Aggregate calls appear next to raw field references.
    #[error("mixing aggregate and non-aggregate queries is not supported")]
    MixedAggregates,

    /// An aggregate call received the wrong number of arguments.
    #[error("invalid number of arguments for {name}, expected {expected}, got {got}")]
    ArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },

    /// The second argument of `percentile` is not a number.
    #[error("expected float argument in percentile()")]
    PercentileArgument,
}

impl SelectStatement {
    /// Validates aggregate usage in the field list.
    pub fn validate(&self) -> Result<(), SemanticError> {
        let mut check = AggregateCheck::default();
        for field in &self.fields {
            if let ControlFlow::Break(err) = check.visit_field(field) {
                return Err(err);
            }
        }

        if check.aggregates > 0 && check.raw_fields > 0 {
            return Err(SemanticError::MixedAggregates);
        }
        Ok(())
    }
}

/// Counts aggregate calls and field references found outside of them.
#[derive(Default)]
struct AggregateCheck {
    aggregates: usize,
    raw_fields: usize,
}

impl Visit for AggregateCheck {
    type Break = SemanticError;

    fn visit_expr(&mut self, expr: &Expr) -> ControlFlow<SemanticError> {
        match expr {
            Expr::Call(call) if is_aggregate(&call.name) => {
                if let Err(err) = validate_arguments(call) {
                    return ControlFlow::Break(err);
                }
                self.aggregates += 1;
                // References inside an aggregate are its inputs, not raw fields.
                ControlFlow::Continue(())
            }
            Expr::VarRef(_) => {
                self.raw_fields += 1;
                ControlFlow::Continue(())
            }
            _ => walk_expr(self, expr),
        }
    }
}

fn validate_arguments(call: &Call) -> Result<(), SemanticError> {
    let got = call.args.len();
    if call.name == "percentile" {
        if got != 2 {
            return Err(SemanticError::ArgumentCount {
                name: call.name.to_string(),
                expected: 2,
                got,
            });
        }
        return match call.args.get(1) {
            Some(Expr::NumberLiteral(_) | Expr::IntegerLiteral(_)) => Ok(()),
            _ => Err(SemanticError::PercentileArgument),
        };
    }

    if got != 1 {
        return Err(SemanticError::ArgumentCount {
            name: call.name.to_string(),
            expected: 1,
            got,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, Measurement, Source, VarRef};

    fn statement(exprs: Vec<Expr>) -> SelectStatement {
        SelectStatement {
            fields: exprs.into_iter().map(Field::new).collect(),
            sources: vec![Source::Measurement(Measurement::named("cpu"))],
            condition: None,
            is_raw_query: false,
        }
    }

    fn call(name: &str, args: Vec<Expr>) -> Expr {
        Expr::Call(Call {
            name: name.into(),
            args,
        })
    }

    fn field(name: &str) -> Expr {
        Expr::VarRef(VarRef::new(name))
    }

    #[test]
    fn raw_and_aggregate_only_queries_pass() {
        assert_eq!(statement(vec![field("a"), field("b")]).validate(), Ok(()));
        assert_eq!(
            statement(vec![
                call("mean", vec![field("a")]),
                call("max", vec![field("b")])
            ])
            .validate(),
            Ok(())
        );
    }

    #[test]
    fn mixing_is_rejected() {
        let err = statement(vec![call("mean", vec![field("a")]), field("b")])
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "mixing aggregate and non-aggregate queries is not supported"
        );
    }

    #[test]
    fn non_aggregate_calls_are_transparent() {
        // The reference inside abs() is still a raw field.
        let err = statement(vec![
            call("abs", vec![field("a")]),
            call("sum", vec![field("b")]),
        ])
        .validate()
        .unwrap_err();
        assert_eq!(err, SemanticError::MixedAggregates);

        assert_eq!(statement(vec![call("now", vec![])]).validate(), Ok(()));
    }

    #[test]
    fn argument_counts() {
        let err = statement(vec![call("count", vec![])]).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of arguments for count, expected 1, got 0"
        );

        let err = statement(vec![call("percentile", vec![field("a")])])
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of arguments for percentile, expected 2, got 1"
        );
    }

    #[test]
    fn quoted_distinct_is_checked_as_an_aggregate() {
        let err = crate::parse_query("SELECT \"distinct\"(host), value FROM cpu").unwrap_err();
        assert_eq!(
            err.message_text(),
            Some("mixing aggregate and non-aggregate queries is not supported")
        );

        let err = crate::parse_query("SELECT \"distinct\"(a, b) FROM cpu").unwrap_err();
        assert_eq!(
            err.message_text(),
            Some("invalid number of arguments for distinct, expected 1, got 2")
        );
    }

    #[test]
    fn percentile_needs_numeric_argument() {
        let ok = statement(vec![call(
            "percentile",
            vec![field("a"), Expr::IntegerLiteral(90)],
        )]);
        assert_eq!(ok.validate(), Ok(()));

        let err = statement(vec![call(
            "percentile",
            vec![field("a"), Expr::StringLiteral("90".into())],
        )])
        .validate()
        .unwrap_err();
        assert_eq!(err, SemanticError::PercentileArgument);
    }
}
