//! SELECT field list parsing.

use crate::common::{parse_error, select, var};
use influxql_parser::{Call, Expr};

#[test]
fn aliases() {
    let statement = select(r#"SELECT mean(value) AS "mean value", max(value) AS top FROM cpu"#);
    let aliases: Vec<_> = statement
        .fields
        .iter()
        .map(|field| field.alias.as_deref())
        .collect();
    assert_eq!(aliases, vec![Some("mean value"), Some("top")]);
}

#[test]
fn keyword_alias_must_be_quoted() {
    assert_eq!(
        parse_error("SELECT value AS from FROM cpu"),
        "found FROM, expected identifier at line 1, char 17"
    );
    let statement = select(r#"SELECT value AS "from" FROM cpu"#);
    assert_eq!(statement.fields[0].alias.as_deref(), Some("from"));
}

#[test]
fn fields_without_spaces_after_commas() {
    let statement = select("SELECT a,b,c FROM m");
    let exprs: Vec<_> = statement.fields.into_iter().map(|f| f.expr).collect();
    assert_eq!(exprs, vec![var("a"), var("b"), var("c")]);
}

#[test]
fn calls_with_multiple_arguments() {
    let statement = select("SELECT top(value, host, 3) FROM cpu");
    assert_eq!(
        statement.fields[0].expr,
        Expr::Call(Call {
            name: "top".into(),
            args: vec![var("value"), var("host"), Expr::IntegerLiteral(3)],
        })
    );
    assert!(!statement.is_raw_query);
}

#[test]
fn nested_condition_in_call_is_rejected() {
    assert_eq!(
        parse_error("SELECT a, sum(b = 1) FROM m"),
        "invalid operator = in SELECT clause; operator is intended for WHERE clause at line 1, char 11"
    );
    assert_eq!(
        parse_error("SELECT (a OR b) FROM m"),
        "invalid operator OR in SELECT clause; operator is intended for WHERE clause at line 1, char 8"
    );
}

#[test]
fn empty_field_list() {
    assert_eq!(
        parse_error("SELECT FROM cpu"),
        "found FROM, expected identifier, string, number, bool at line 1, char 8"
    );
}

#[test]
fn trailing_comma_in_fields() {
    assert_eq!(
        parse_error("SELECT a, FROM cpu"),
        "found FROM, expected identifier, string, number, bool at line 1, char 11"
    );
}
