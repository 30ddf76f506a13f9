//! Token types and representations for InfluxQL lexical analysis.

use crate::ast::Span;
use smol_str::SmolStr;
use std::fmt;

/// The kind of a lexical token in InfluxQL.
///
/// Kinds are payload-free; the token's text travels separately in
/// [`Token::lit`] so that kinds can be compared and classified cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    // Special tokens
    Illegal,
    Eof,
    Ws,

    // Literals
    Ident,
    BoundParam,
    Number,
    Integer,
    String,
    BadString,
    BadEscape,
    True,
    False,
    Regex,
    BadRegex,

    // Operators
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

    // Punctuation
    LParen,
    RParen,
    Comma,
    Colon,
    DoubleColon,
    Semicolon,
    Dot,

    // Keywords
    All,
    Alter,
    Any,
    As,
    Asc,
    Begin,
    By,
    Create,
    Continuous,
    Database,
    Databases,
    Default,
    Delete,
    Desc,
    Destinations,
    Diagnostics,
    Distinct,
    Drop,
    Duration,
    End,
    Every,
    Explain,
    Field,
    For,
    From,
    Grant,
    Grants,
    Group,
    Groups,
    In,
    Inf,
    Insert,
    Into,
    Key,
    Keys,
    Kill,
    Limit,
    Measurement,
    Measurements,
    Name,
    Offset,
    On,
    Order,
    Password,
    Policy,
    Policies,
    Privileges,
    Queries,
    Query,
    Read,
    Replication,
    Resample,
    Retention,
    Revoke,
    Select,
    Series,
    Set,
    Show,
    Shard,
    Shards,
    Slimit,
    Soffset,
    Stats,
    Subscription,
    Subscriptions,
    Tag,
    To,
    User,
    Users,
    Values,
    Where,
    With,
    Write,
}

impl TokenKind {
    /// Returns true if this token is a binary operator.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::EqRegex
                | TokenKind::NotEqRegex
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// Returns the binding strength of an operator; higher binds tighter.
    ///
    /// Non-operators have precedence 0.
    pub fn precedence(&self) -> u8 {
        match self {
            TokenKind::Or => 1,
            TokenKind::And => 2,
            TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::EqRegex
            | TokenKind::NotEqRegex
            | TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::Gt
            | TokenKind::GtEq => 4,
            TokenKind::Add | TokenKind::Sub => 5,
            TokenKind::Mul | TokenKind::Div => 6,
            _ => 0,
        }
    }

    /// Returns true for the regex match operators `=~` and `!~`.
    pub fn is_regex_op(&self) -> bool {
        matches!(self, TokenKind::EqRegex | TokenKind::NotEqRegex)
    }

    /// Returns true if this token is a reserved keyword.
    ///
    /// `AND`, `OR`, `TRUE` and `FALSE` are spelled like keywords and are
    /// reserved as well. Keyword variants are declared last, so the derived
    /// ordering is enough to find them.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And | TokenKind::Or | TokenKind::True | TokenKind::False
        ) || *self >= TokenKind::All
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ws => "WS",
            TokenKind::Ident => "IDENT",
            TokenKind::BoundParam => "BOUNDPARAM",
            TokenKind::Number => "NUMBER",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::BadString => "BADSTRING",
            TokenKind::BadEscape => "BADESCAPE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Regex => "REGEX",
            TokenKind::BadRegex => "BADREGEX",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "!=",
            TokenKind::EqRegex => "=~",
            TokenKind::NotEqRegex => "!~",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::All => "ALL",
            TokenKind::Alter => "ALTER",
            TokenKind::Any => "ANY",
            TokenKind::As => "AS",
            TokenKind::Asc => "ASC",
            TokenKind::Begin => "BEGIN",
            TokenKind::By => "BY",
            TokenKind::Create => "CREATE",
            TokenKind::Continuous => "CONTINUOUS",
            TokenKind::Database => "DATABASE",
            TokenKind::Databases => "DATABASES",
            TokenKind::Default => "DEFAULT",
            TokenKind::Delete => "DELETE",
            TokenKind::Desc => "DESC",
            TokenKind::Destinations => "DESTINATIONS",
            TokenKind::Diagnostics => "DIAGNOSTICS",
            TokenKind::Distinct => "DISTINCT",
            TokenKind::Drop => "DROP",
            TokenKind::Duration => "DURATION",
            TokenKind::End => "END",
            TokenKind::Every => "EVERY",
            TokenKind::Explain => "EXPLAIN",
            TokenKind::Field => "FIELD",
            TokenKind::For => "FOR",
            TokenKind::From => "FROM",
            TokenKind::Grant => "GRANT",
            TokenKind::Grants => "GRANTS",
            TokenKind::Group => "GROUP",
            TokenKind::Groups => "GROUPS",
            TokenKind::In => "IN",
            TokenKind::Inf => "INF",
            TokenKind::Insert => "INSERT",
            TokenKind::Into => "INTO",
            TokenKind::Key => "KEY",
            TokenKind::Keys => "KEYS",
            TokenKind::Kill => "KILL",
            TokenKind::Limit => "LIMIT",
            TokenKind::Measurement => "MEASUREMENT",
            TokenKind::Measurements => "MEASUREMENTS",
            TokenKind::Name => "NAME",
            TokenKind::Offset => "OFFSET",
            TokenKind::On => "ON",
            TokenKind::Order => "ORDER",
            TokenKind::Password => "PASSWORD",
            TokenKind::Policy => "POLICY",
            TokenKind::Policies => "POLICIES",
            TokenKind::Privileges => "PRIVILEGES",
            TokenKind::Queries => "QUERIES",
            TokenKind::Query => "QUERY",
            TokenKind::Read => "READ",
            TokenKind::Replication => "REPLICATION",
            TokenKind::Resample => "RESAMPLE",
            TokenKind::Retention => "RETENTION",
            TokenKind::Revoke => "REVOKE",
            TokenKind::Select => "SELECT",
            TokenKind::Series => "SERIES",
            TokenKind::Set => "SET",
            TokenKind::Show => "SHOW",
            TokenKind::Shard => "SHARD",
            TokenKind::Shards => "SHARDS",
            TokenKind::Slimit => "SLIMIT",
            TokenKind::Soffset => "SOFFSET",
            TokenKind::Stats => "STATS",
            TokenKind::Subscription => "SUBSCRIPTION",
            TokenKind::Subscriptions => "SUBSCRIPTIONS",
            TokenKind::Tag => "TAG",
            TokenKind::To => "TO",
            TokenKind::User => "USER",
            TokenKind::Users => "USERS",
            TokenKind::Values => "VALUES",
            TokenKind::Where => "WHERE",
            TokenKind::With => "WITH",
            TokenKind::Write => "WRITE",
        };
        f.write_str(text)
    }
}

/// A zero-based line/character position in source text.
///
/// `char` counts Unicode scalar values from the start of the line.
/// Rendering is one-based, as expected in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub line: usize,
    pub char: usize,
}

impl Pos {
    /// Creates a new position.
    pub fn new(line: usize, char: usize) -> Self {
        Self { line, char }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, char {}", self.line + 1, self.char + 1)
    }
}

/// A lexical token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The decoded token text.
    ///
    /// Empty for keywords, operators, and punctuation, whose text is implied by
    /// the kind. Quoted identifiers and strings carry their unescaped value.
    pub lit: SmolStr,
    /// Line/character position of the first character.
    pub pos: Pos,
    /// The byte span in source text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lit: impl Into<SmolStr>, pos: Pos, span: Span) -> Self {
        Self {
            kind,
            lit: lit.into(),
            pos,
            span,
        }
    }

    /// Text used to describe this token in "found ..." diagnostics.
    pub fn text(&self) -> String {
        if self.lit.is_empty() {
            self.kind.to_string()
        } else {
            self.lit.to_string()
        }
    }
}
