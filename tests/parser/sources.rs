//! FROM clause parsing: segmented names and regex sources.

use crate::common::{parse_error, select};
use influxql_parser::{Measurement, SelectStatement, Source, quote_ident};

fn sources(statement: SelectStatement) -> Vec<Measurement> {
    statement
        .sources
        .into_iter()
        .map(|source| match source {
            Source::Measurement(m) => m,
        })
        .collect()
}

fn single(source: &str) -> Measurement {
    let mut all = sources(select(&format!("SELECT v FROM {source}")));
    assert_eq!(all.len(), 1);
    all.remove(0)
}

#[test]
fn regex_only_source() {
    let m = single("/^cpu\\d$/");
    assert_eq!(m.regex.as_ref().map(|re| re.as_str()), Some("^cpu\\d$"));
    assert_eq!(m.database, None);
    assert_eq!(m.retention_policy, None);
    assert_eq!(m.name, None);
}

#[test]
fn qualified_regex_sources() {
    let m = single("autogen./^cpu/");
    assert_eq!(m.retention_policy.as_deref(), Some("autogen"));
    assert_eq!(m.name, None);
    assert!(m.regex.is_some());

    let m = single("\"telegraf\".\"autogen\"./^cpu/");
    assert_eq!(m.database.as_deref(), Some("telegraf"));
    assert_eq!(m.retention_policy.as_deref(), Some("autogen"));
    assert!(m.regex.is_some());
}

#[test]
fn multiple_sources_mix_forms() {
    let all = sources(select("SELECT v FROM cpu, /^mem/ , db.rp.disk"));
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], Measurement::named("cpu"));
    assert!(all[1].regex.is_some());
    assert_eq!(all[2].database.as_deref(), Some("db"));
}

#[test]
fn quoted_names_round_trip_through_quote_ident() {
    let cases: [&[&str]; 4] = [
        &["cpu"],
        &["my db", "rp", "cpu load"],
        &["db", "select", "a\"b"],
        &["rp", "héllo"],
    ];
    for segments in cases {
        let rendered = quote_ident(segments);
        let m = single(&rendered);
        let parsed: Vec<String> = [m.database, m.retention_policy, m.name]
            .into_iter()
            .flatten()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(parsed, segments, "rendered as `{rendered}`");
    }
}

#[test]
fn measurement_display() {
    assert_eq!(single("cpu").to_string(), "cpu");
    assert_eq!(single("\"db\"..cpu").to_string(), "db..cpu");
    assert_eq!(single("\"my db\".rp.\"from\"").to_string(), "\"my db\".rp.\"from\"");
    assert_eq!(single("rp./a\\/b/").to_string(), "rp./a\\/b/");
}

#[test]
fn missing_source() {
    assert_eq!(
        parse_error("SELECT v FROM 1"),
        "found 1, expected identifier at line 1, char 15"
    );
    assert_eq!(
        parse_error("SELECT v FROM cpu,"),
        "found EOF, expected identifier at line 1, char 19"
    );
}

#[test]
fn too_many_segments() {
    let err = parse_error("SELECT v FROM db.rp.cpu.extra");
    assert_eq!(
        err,
        "too many segments in \"db\".\"rp\".\"cpu\".extra at line 1, char 15"
    );
}
