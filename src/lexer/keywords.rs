//! Keyword recognition for InfluxQL.
//!
//! Keywords are case-insensitive. Every keyword is reserved: a bare identifier
//! spelled like one must be double-quoted to be used as a name.

use super::token::TokenKind;

/// Looks up a keyword by name (case-insensitive).
pub fn lookup_keyword(name: &str) -> Option<TokenKind> {
    let kind = match name.to_ascii_uppercase().as_str() {
        // Boolean literals and logical operators
        "TRUE" => TokenKind::True,
        "FALSE" => TokenKind::False,
        "AND" => TokenKind::And,
        "OR" => TokenKind::Or,

        // Query clauses
        "SELECT" => TokenKind::Select,
        "FROM" => TokenKind::From,
        "WHERE" => TokenKind::Where,
        "AS" => TokenKind::As,
        "INTO" => TokenKind::Into,
        "GROUP" => TokenKind::Group,
        "BY" => TokenKind::By,
        "ORDER" => TokenKind::Order,
        "ASC" => TokenKind::Asc,
        "DESC" => TokenKind::Desc,
        "LIMIT" => TokenKind::Limit,
        "OFFSET" => TokenKind::Offset,
        "SLIMIT" => TokenKind::Slimit,
        "SOFFSET" => TokenKind::Soffset,
        "DISTINCT" => TokenKind::Distinct,
        "IN" => TokenKind::In,
        "ON" => TokenKind::On,
        "WITH" => TokenKind::With,
        "KEY" => TokenKind::Key,
        "KEYS" => TokenKind::Keys,
        "FIELD" => TokenKind::Field,
        "TAG" => TokenKind::Tag,
        "NAME" => TokenKind::Name,
        "VALUES" => TokenKind::Values,
        "INF" => TokenKind::Inf,
        "EXPLAIN" => TokenKind::Explain,

        // Statement verbs
        "ALTER" => TokenKind::Alter,
        "BEGIN" => TokenKind::Begin,
        "CREATE" => TokenKind::Create,
        "DELETE" => TokenKind::Delete,
        "DROP" => TokenKind::Drop,
        "END" => TokenKind::End,
        "GRANT" => TokenKind::Grant,
        "INSERT" => TokenKind::Insert,
        "KILL" => TokenKind::Kill,
        "REVOKE" => TokenKind::Revoke,
        "SET" => TokenKind::Set,
        "SHOW" => TokenKind::Show,

        // Schema and administration objects
        "ALL" => TokenKind::All,
        "ANY" => TokenKind::Any,
        "CONTINUOUS" => TokenKind::Continuous,
        "DATABASE" => TokenKind::Database,
        "DATABASES" => TokenKind::Databases,
        "DEFAULT" => TokenKind::Default,
        "DESTINATIONS" => TokenKind::Destinations,
        "DIAGNOSTICS" => TokenKind::Diagnostics,
        "DURATION" => TokenKind::Duration,
        "EVERY" => TokenKind::Every,
        "FOR" => TokenKind::For,
        "GRANTS" => TokenKind::Grants,
        "GROUPS" => TokenKind::Groups,
        "MEASUREMENT" => TokenKind::Measurement,
        "MEASUREMENTS" => TokenKind::Measurements,
        "PASSWORD" => TokenKind::Password,
        "POLICY" => TokenKind::Policy,
        "POLICIES" => TokenKind::Policies,
        "PRIVILEGES" => TokenKind::Privileges,
        "QUERIES" => TokenKind::Queries,
        "QUERY" => TokenKind::Query,
        "READ" => TokenKind::Read,
        "REPLICATION" => TokenKind::Replication,
        "RESAMPLE" => TokenKind::Resample,
        "RETENTION" => TokenKind::Retention,
        "SERIES" => TokenKind::Series,
        "SHARD" => TokenKind::Shard,
        "SHARDS" => TokenKind::Shards,
        "STATS" => TokenKind::Stats,
        "SUBSCRIPTION" => TokenKind::Subscription,
        "SUBSCRIPTIONS" => TokenKind::Subscriptions,
        "TO" => TokenKind::To,
        "USER" => TokenKind::User,
        "USERS" => TokenKind::Users,
        "WRITE" => TokenKind::Write,

        _ => return None,
    };
    Some(kind)
}
