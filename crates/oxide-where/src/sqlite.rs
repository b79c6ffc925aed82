//! Binding exported values onto `sqlx` SQLite queries.
//!
//! ```ignore
//! let (clause, values) = where_builder.build();
//! let sql = format!("SELECT id, name FROM users{clause} ORDER BY id");
//! let rows: Vec<(i64, String)> = bind_values_as(sqlx::query_as(&sql), values)
//!     .fetch_all(&pool)
//!     .await?;
//! ```

use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

use crate::value::SqlValue;

/// `Query` and `QueryAs` share `bind` but no trait, so the match is
/// expanded once per query type.
macro_rules! bind_match {
    ($query:expr, $value:expr) => {
        match $value {
            SqlValue::Null => $query.bind(Option::<i64>::None),
            SqlValue::Bool(b) => $query.bind(b),
            SqlValue::Int(i) => $query.bind(i),
            SqlValue::Float(f) => $query.bind(f),
            SqlValue::Text(s) => $query.bind(s),
            SqlValue::Blob(b) => $query.bind(b),
            SqlValue::Date(d) => $query.bind(d),
            SqlValue::Timestamp(ts) => $query.bind(ts),
        }
    };
}

/// Binds every value, in order, to a raw query.
pub fn bind_values<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    values.into_iter().fold(query, bind_value)
}

/// Binds every value, in order, to a typed query.
pub fn bind_values_as<'q, O>(
    query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>>
where
    O: for<'r> FromRow<'r, SqliteRow>,
{
    values.into_iter().fold(query, bind_value_as)
}

/// Binds a single value to a raw query.
pub fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    bind_match!(query, value)
}

/// Binds a single value to a typed query.
pub fn bind_value_as<'q, O>(
    query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    value: SqlValue,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>>
where
    O: for<'r> FromRow<'r, SqliteRow>,
{
    bind_match!(query, value)
}
