//! Expression parsing through the public `parse_expr` entry point.

use crate::common::{binary, var};
use influxql_parser::{BinaryOperator, Call, DataType, Expr, VarRef, parse_expr};

// ===== Precedence =====

#[test]
fn precedence_levels() {
    // OR < AND < comparison < additive < multiplicative
    assert_eq!(
        parse_expr("a OR b AND c = d + e * f").unwrap(),
        binary(
            BinaryOperator::Or,
            var("a"),
            binary(
                BinaryOperator::And,
                var("b"),
                binary(
                    BinaryOperator::Eq,
                    var("c"),
                    binary(
                        BinaryOperator::Add,
                        var("d"),
                        binary(BinaryOperator::Mul, var("e"), var("f"))
                    )
                )
            )
        )
    );
}

#[test]
fn mixed_precedence_chain() {
    // a * b + c * d => (a * b) + (c * d)
    assert_eq!(
        parse_expr("a * b + c * d").unwrap(),
        binary(
            BinaryOperator::Add,
            binary(BinaryOperator::Mul, var("a"), var("b")),
            binary(BinaryOperator::Mul, var("c"), var("d"))
        )
    );
}

#[test]
fn division_is_left_associative() {
    assert_eq!(
        parse_expr("a / b / c").unwrap(),
        binary(
            BinaryOperator::Div,
            binary(BinaryOperator::Div, var("a"), var("b")),
            var("c")
        )
    );
}

#[test]
fn division_without_spaces() {
    assert_eq!(
        parse_expr("a/b").unwrap(),
        binary(BinaryOperator::Div, var("a"), var("b"))
    );
}

#[test]
fn nested_parentheses() {
    assert_eq!(
        parse_expr("((a))").unwrap(),
        Expr::Paren(Box::new(Expr::Paren(Box::new(var("a")))))
    );
    let err = parse_expr("(a + b").unwrap_err();
    assert_eq!(err.to_string(), "found EOF, expected ) at line 1, char 7");
}

// ===== Operands =====

#[test]
fn negative_literals_after_operators() {
    assert_eq!(
        parse_expr("a - -1").unwrap(),
        binary(BinaryOperator::Sub, var("a"), Expr::IntegerLiteral(-1))
    );
    assert_eq!(
        parse_expr("a * -0.5").unwrap(),
        binary(BinaryOperator::Mul, var("a"), Expr::NumberLiteral(-0.5))
    );
}

#[test]
fn numbers_and_integers_are_distinct() {
    assert_eq!(parse_expr("10").unwrap(), Expr::IntegerLiteral(10));
    assert_eq!(parse_expr("10.0").unwrap(), Expr::NumberLiteral(10.0));
    assert_eq!(parse_expr(".5").unwrap(), Expr::NumberLiteral(0.5));
}

#[test]
fn dotted_and_quoted_references() {
    assert_eq!(parse_expr("cpu.usage").unwrap(), var("cpu.usage"));
    assert_eq!(parse_expr("\"usage idle\"").unwrap(), var("usage idle"));
    assert_eq!(
        parse_expr("\"cpu\".usage::float").unwrap(),
        Expr::VarRef(VarRef::typed("cpu.usage", DataType::Float))
    );
}

#[test]
fn keyword_is_not_an_operand() {
    let err = parse_expr("FROM").unwrap_err();
    assert_eq!(
        err.to_string(),
        "found FROM, expected identifier, string, number, bool at line 1, char 1"
    );
}

#[test]
fn keyword_cannot_name_a_call() {
    assert_eq!(
        parse_expr("COUNT(DISTINCT(host))").unwrap_err().to_string(),
        "found DISTINCT, expected identifier, string, number, bool at line 1, char 7"
    );
}

#[test]
fn function_names_are_lowercased() {
    assert_eq!(
        parse_expr("Derivative(value)").unwrap(),
        Expr::Call(Call {
            name: "derivative".into(),
            args: vec![var("value")],
        })
    );
}

// ===== Regex =====

#[test]
fn regex_without_spaces() {
    let Expr::Binary(binary) = parse_expr("host=~/^a/").unwrap() else {
        panic!("expected binary");
    };
    assert_eq!(binary.op, BinaryOperator::EqRegex);
    assert!(matches!(&*binary.rhs, Expr::RegexLiteral(re) if re.as_str() == "^a"));
}

#[test]
fn escaped_slash_in_regex() {
    let Expr::Binary(binary) = parse_expr(r"path !~ /\/tmp\/.*/").unwrap() else {
        panic!("expected binary");
    };
    assert_eq!(binary.op, BinaryOperator::NotEqRegex);
    assert!(matches!(&*binary.rhs, Expr::RegexLiteral(re) if re.as_str() == "/tmp/.*"));
}

#[test]
fn invalid_regex_is_reported() {
    let err = parse_expr("host =~ /(/").unwrap_err();
    assert!(err.to_string().ends_with("at line 1, char 9"), "{err}");

    let err = parse_expr("host =~ /abc").unwrap_err();
    assert_eq!(err.to_string(), "bad regex: abc at line 1, char 9");
}
