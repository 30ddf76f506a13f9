//! Expression parsing for InfluxQL.
//!
//! Binary expressions are built by precedence climbing over a right spine:
//! each new operator descends the right-hand children of the tree built so
//! far and is inserted above the first node that binds at least as tightly.
//! That keeps equal-precedence operators left-associative without a
//! precedence table walk per token.

use crate::ast::{BinaryExpr, BinaryOperator, Call, DataType, Expr, RegexLiteral, VarRef};
use crate::diag::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::base::{ParseResult, TokenStream};
use crate::parser::params::ParamValue;
use crate::parser::references::continue_segmented_idents;
use regex::Regex;

/// Parses a full expression.
pub(crate) fn parse_expr(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut root = parse_unary_expr(stream)?;

    loop {
        let token = stream.scan_ignore_whitespace();
        let Some(op) = BinaryOperator::from_token(token.kind) else {
            stream.unscan();
            return Ok(root);
        };

        let rhs = if token.kind.is_regex_op() {
            stream.consume_whitespace();
            match parse_regex(stream)? {
                Some(regex) => Expr::RegexLiteral(regex),
                None => {
                    let found = stream.scan_ignore_whitespace();
                    return Err(stream.unexpected(&found, &["regex"]));
                }
            }
        } else {
            parse_unary_expr(stream)?
        };

        root = insert_binary(root, op, rhs);
    }
}

/// Inserts `op rhs` into the right spine of `node`.
fn insert_binary(node: Expr, op: BinaryOperator, rhs: Expr) -> Expr {
    match node {
        Expr::Binary(mut binary) if binary.op.precedence() < op.precedence() => {
            let inner = std::mem::replace(&mut *binary.rhs, Expr::BooleanLiteral(false));
            *binary.rhs = insert_binary(inner, op, rhs);
            Expr::Binary(binary)
        }
        node => Expr::Binary(BinaryExpr::new(op, node, rhs)),
    }
}

/// Parses a non-binary expression.
pub(crate) fn parse_unary_expr(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = stream.scan_ignore_whitespace();
    match token.kind {
        TokenKind::LParen => {
            let expr = parse_expr(stream)?;
            let close = stream.scan_ignore_whitespace();
            if close.kind != TokenKind::RParen {
                return Err(stream.unexpected(&close, &[")"]));
            }
            Ok(Expr::Paren(Box::new(expr)))
        }
        TokenKind::Ident => {
            // A call only when `(` follows with no whitespace in between.
            if stream.scan().kind == TokenKind::LParen {
                return parse_call(stream, &token.lit).map(Expr::Call);
            }
            stream.unscan();
            parse_var_ref(stream, token).map(Expr::VarRef)
        }
        TokenKind::String => Ok(Expr::StringLiteral(token.lit.to_string())),
        TokenKind::Number => token
            .lit
            .parse::<f64>()
            .map(Expr::NumberLiteral)
            .map_err(|_| ParseError::at_token("unable to parse number", &token)),
        TokenKind::Integer => token
            .lit
            .parse::<i64>()
            .map(Expr::IntegerLiteral)
            .map_err(|_| ParseError::at_token("unable to parse integer", &token)),
        TokenKind::True | TokenKind::False => Ok(Expr::BooleanLiteral(token.kind == TokenKind::True)),
        TokenKind::Regex => compile_regex(&token).map(Expr::RegexLiteral),
        TokenKind::BoundParam => bind_param(stream, &token),
        TokenKind::BadString => Err(ParseError::at_token(
            format!("unterminated string: {}", token.lit),
            &token,
        )),
        TokenKind::BadEscape => Err(ParseError::at_token(
            format!("bad escape: {}", token.lit),
            &token,
        )),
        _ => Err(stream.unexpected(&token, &["identifier", "string", "number", "bool"])),
    }
}

/// Parses the rest of a variable reference whose first identifier is `first`.
fn parse_var_ref(stream: &mut TokenStream<'_>, first: Token) -> ParseResult<VarRef> {
    let segments = continue_segmented_idents(stream, first)?;
    let name = segments.join(".");

    if stream.scan().kind != TokenKind::DoubleColon {
        stream.unscan();
        return Ok(VarRef::new(name));
    }

    let token = stream.scan();
    let data_type = match token.kind {
        TokenKind::Ident => DataType::from_name(&token.lit),
        _ => None,
    };
    match data_type {
        Some(data_type) => Ok(VarRef::typed(name, data_type)),
        None => Err(stream.unexpected(&token, &["float", "integer", "string", "boolean"])),
    }
}

/// Parses call arguments after `name(` has been consumed.
fn parse_call(stream: &mut TokenStream<'_>, name: &str) -> ParseResult<Call> {
    let name = name.to_lowercase();
    let mut args = Vec::new();

    match parse_regex(stream)? {
        Some(regex) => args.push(Expr::RegexLiteral(regex)),
        None => {
            if stream.scan().kind == TokenKind::RParen {
                return Ok(Call {
                    name: name.into(),
                    args,
                });
            }
            stream.unscan();
            args.push(parse_expr(stream)?);
        }
    }

    loop {
        if stream.scan_ignore_whitespace().kind != TokenKind::Comma {
            stream.unscan();
            break;
        }
        match parse_regex(stream)? {
            Some(regex) => args.push(Expr::RegexLiteral(regex)),
            None => args.push(parse_expr(stream)?),
        }
    }

    let close = stream.scan();
    if close.kind != TokenKind::RParen {
        return Err(stream.unexpected(&close, &[")"]));
    }

    Ok(Call {
        name: name.into(),
        args,
    })
}

/// Parses a `/regex/` literal if one starts at the next non-whitespace character.
///
/// Returns `Ok(None)` without consuming anything but whitespace when the
/// next character is not `/`.
pub(crate) fn parse_regex(stream: &mut TokenStream<'_>) -> ParseResult<Option<RegexLiteral>> {
    if stream.peek_char().is_some_and(is_whitespace) {
        stream.consume_whitespace();
    }
    if stream.peek_char() != Some('/') {
        return Ok(None);
    }

    let token = stream.scan_regex();
    match token.kind {
        TokenKind::Regex => compile_regex(&token).map(Some),
        TokenKind::BadEscape => Err(ParseError::at_token(
            format!("bad escape: {}", token.lit),
            &token,
        )),
        TokenKind::BadRegex => Err(ParseError::at_token(
            format!("bad regex: {}", token.lit),
            &token,
        )),
        _ => Err(stream.unexpected(&token, &["regex"])),
    }
}

fn compile_regex(token: &Token) -> ParseResult<RegexLiteral> {
    Regex::new(&token.lit)
        .map(RegexLiteral)
        .map_err(|err| ParseError::at_token(err.to_string(), token))
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Substitutes a `$name` token with the literal bound to `name`.
fn bind_param(stream: &TokenStream<'_>, token: &Token) -> ParseResult<Expr> {
    let key = token.lit.strip_prefix('$').unwrap_or(&token.lit);
    if key.is_empty() {
        return Err(ParseError::at_token("empty bound parameter", token));
    }

    let Some(value) = stream.param(key) else {
        return Err(ParseError::at_token(
            format!("missing parameter: {key}"),
            token,
        ));
    };

    match value {
        ParamValue::Float(v) => Ok(Expr::NumberLiteral(*v)),
        ParamValue::Integer(v) => Ok(Expr::IntegerLiteral(*v)),
        ParamValue::String(v) => Ok(Expr::StringLiteral(v.clone())),
        ParamValue::Boolean(v) => Ok(Expr::BooleanLiteral(*v)),
        other @ (ParamValue::Null | ParamValue::List(_)) => Err(ParseError::at_token(
            format!("unable to bind parameter with type {}", other.type_name()),
            token,
        )),
    }
}
