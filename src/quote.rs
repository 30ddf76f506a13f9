//! Quoting helpers for rendering identifiers and strings back to InfluxQL.

use crate::lexer::keywords::lookup_keyword;

/// Wraps `s` in single quotes, escaping backslashes, quotes and newlines.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    push_escaped(&mut out, s, '\'');
    out.push('\'');
    out
}

/// Joins identifier segments with `.`, double-quoting segments that need it.
///
/// Every non-final, non-empty segment is quoted. Non-final empty segments
/// render as nothing, so `["db", "", "cpu"]` becomes `"db"..cpu`.
pub fn quote_ident<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    let last = segments.len().saturating_sub(1);
    for (i, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        let quote = if i < last {
            !segment.is_empty()
        } else {
            ident_needs_quotes(segment)
        };

        if quote {
            out.push('"');
        }
        push_escaped(&mut out, segment, '"');
        if quote {
            out.push('"');
        }
        if i < last {
            out.push('.');
        }
    }
    out
}

/// Returns true if `ident` cannot be written as a bare identifier.
///
/// That is the case for keywords, the empty string and anything outside
/// `[A-Za-z_][A-Za-z0-9_]*`.
pub fn ident_needs_quotes(ident: &str) -> bool {
    if lookup_keyword(ident).is_some() {
        return true;
    }
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if is_ident_first_char(first) => !chars.all(is_ident_char),
        _ => true,
    }
}

fn is_ident_first_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn push_escaped(out: &mut String, s: &str, quote: char) {
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\\' => out.push_str("\\\\"),
            ch if ch == quote => {
                out.push('\\');
                out.push(ch);
            }
            ch => out.push(ch),
        }
    }
}
