//! Bound parameter substitution.

use crate::common::{binary, var};
use influxql_parser::{BinaryOperator, Expr, ParamValue, Params, Parser};

fn params(entries: &[(&str, ParamValue)]) -> Params {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

fn condition(source: &str, params: Params) -> Expr {
    Parser::new(source).with_params(params).parse_expr().unwrap()
}

#[test]
fn each_scalar_type_binds_to_its_literal() {
    let bound = params(&[
        ("f", ParamValue::from(1.5)),
        ("i", ParamValue::from(7)),
        ("s", ParamValue::from("web")),
        ("b", ParamValue::from(true)),
    ]);

    assert_eq!(
        condition("x = $f", bound.clone()),
        binary(BinaryOperator::Eq, var("x"), Expr::NumberLiteral(1.5))
    );
    assert_eq!(
        condition("x = $i", bound.clone()),
        binary(BinaryOperator::Eq, var("x"), Expr::IntegerLiteral(7))
    );
    assert_eq!(
        condition("x = $s", bound.clone()),
        binary(BinaryOperator::Eq, var("x"), Expr::StringLiteral("web".into()))
    );
    assert_eq!(
        condition("x = $b", bound),
        binary(BinaryOperator::Eq, var("x"), Expr::BooleanLiteral(true))
    );
}

#[test]
fn unsupported_types_are_rejected() {
    let bound = params(&[
        ("none", ParamValue::Null),
        ("many", ParamValue::from(vec![1, 2])),
    ]);
    let parser = Parser::new("$none").with_params(bound.clone());
    assert_eq!(
        parser.parse_expr().unwrap_err().to_string(),
        "unable to bind parameter with type null at line 1, char 1"
    );

    let parser = Parser::new("a + $many").with_params(bound);
    assert_eq!(
        parser.parse_expr().unwrap_err().to_string(),
        "unable to bind parameter with type list at line 1, char 5"
    );
}

#[test]
fn empty_parameter_name() {
    let err = Parser::new("a = $").parse_expr().unwrap_err();
    assert_eq!(err.to_string(), "empty bound parameter at line 1, char 5");
}

#[test]
fn parameters_bind_inside_full_queries() {
    let bound = params(&[("host", ParamValue::from("a")), ("n", ParamValue::from(5))]);
    let query = Parser::new("SELECT value FROM cpu WHERE host = $host AND value > $n")
        .with_params(bound)
        .parse_query()
        .unwrap();
    assert_eq!(
        query.to_string(),
        "SELECT value FROM cpu WHERE host = 'a' AND value > 5"
    );
}

#[cfg(feature = "serde")]
#[test]
fn parameters_decode_from_json() {
    let bound: Params = serde_json::from_str(r#"{"host": "server01", "limit": 0.75}"#).unwrap();
    assert_eq!(
        condition("host = $host OR v < $limit", bound),
        binary(
            BinaryOperator::Or,
            binary(
                BinaryOperator::Eq,
                var("host"),
                Expr::StringLiteral("server01".into())
            ),
            binary(BinaryOperator::Lt, var("v"), Expr::NumberLiteral(0.75))
        )
    );
}
