//! Error values and their miette rendering.

use influxql_parser::{ParseErrorKind, Pos, parse_query};
use miette::Diagnostic;

#[test]
fn unexpected_token_carries_found_and_expected() {
    let err = parse_query("SELECT value FROM cpu WHERE").unwrap_err();
    assert_eq!(err.pos, Pos::new(0, 27));
    assert_eq!(
        err.kind,
        ParseErrorKind::Unexpected {
            found: "EOF".into(),
            expected: vec![
                "identifier".into(),
                "string".into(),
                "number".into(),
                "bool".into()
            ],
        }
    );
}

#[test]
fn message_errors_expose_their_text() {
    let err = parse_query("SELECT v FROM a.b.c.d").unwrap_err();
    assert_eq!(err.message_text(), Some("too many segments in \"a\".\"b\".\"c\".d"));
    assert_eq!(err.span, 14..21);
}

#[test]
fn diagnostic_metadata() {
    let source = "SELECT value FROM";
    let err = parse_query(source).unwrap_err();
    assert_eq!(
        err.code().map(|code| code.to_string()),
        Some("influxql::parse".to_string())
    );

    let report = err.to_report(source);
    let labels: Vec<_> = report.labels().into_iter().flatten().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].label(), Some("here"));
    assert_eq!(labels[0].offset(), source.len());
}

#[test]
fn multibyte_positions_count_characters() {
    let err = parse_query("SELECT \"é\" FRM m").unwrap_err();
    assert_eq!(err.pos, Pos::new(0, 11));
    assert_eq!(err.to_string(), "found FRM, expected FROM at line 1, char 12");
}
