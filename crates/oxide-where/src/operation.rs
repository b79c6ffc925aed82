//! Boolean operations accepted by [`WhereBuilder`](crate::WhereBuilder).
//!
//! Each variant is plain data. Rendering lives in the builder so that the
//! whole set is dispatched from a single `match`.

use std::fmt;
use std::str::FromStr;

use crate::error::WhereError;
use crate::value::{SqlValue, ToSqlValue};

/// A single predicate request.
///
/// # Example
///
/// ```rust
/// use oxide_where::{BooleanOperation, WhereBuilder};
///
/// let ops = vec![
///     BooleanOperation::eq("status", "active"),
///     BooleanOperation::between("age", Some(18), None::<i32>),
/// ];
/// let builder = WhereBuilder::from_operations(ops);
/// assert_eq!(builder.where_clause(), " WHERE status = ? AND age >= ?");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanOperation {
    /// `column = ?`, `column <> ?`, `column IS NULL` or `column IS NOT NULL`.
    Equals {
        /// Column name.
        column: String,
        /// Compared value. `Null` selects the `IS [NOT] NULL` form.
        value: SqlValue,
        /// Whether the comparison is inverted.
        negated: bool,
    },
    /// `column < ?`
    LessThan {
        /// Column name.
        column: String,
        /// Upper bound (exclusive).
        value: SqlValue,
    },
    /// `column > ?`
    GreaterThan {
        /// Column name.
        column: String,
        /// Lower bound (exclusive).
        value: SqlValue,
    },
    /// Inclusive range. Either bound may be missing.
    Between {
        /// Column name.
        column: String,
        /// Lower bound (inclusive).
        lower: Option<SqlValue>,
        /// Upper bound (inclusive).
        upper: Option<SqlValue>,
    },
    /// `column IN (...)` or `column NOT IN (...)`.
    In {
        /// Column name.
        column: String,
        /// Candidate values. `None` and an empty list both impose nothing.
        values: Option<Vec<SqlValue>>,
        /// Whether the membership test is inverted.
        negated: bool,
    },
    /// Substring match, `column LIKE '%value%'`.
    Like {
        /// Column name.
        column: String,
        /// Substring to look for. `%` and `_` are not escaped.
        value: String,
    },
}

impl BooleanOperation {
    /// Creates an equality operation.
    #[must_use]
    pub fn eq<V: ToSqlValue>(column: &str, value: V) -> Self {
        Self::Equals {
            column: column.to_string(),
            value: value.to_sql_value(),
            negated: false,
        }
    }

    /// Creates an inequality operation.
    #[must_use]
    pub fn not_eq<V: ToSqlValue>(column: &str, value: V) -> Self {
        Self::Equals {
            column: column.to_string(),
            value: value.to_sql_value(),
            negated: true,
        }
    }

    /// Creates a less-than operation.
    #[must_use]
    pub fn lt<V: ToSqlValue>(column: &str, value: V) -> Self {
        Self::LessThan {
            column: column.to_string(),
            value: value.to_sql_value(),
        }
    }

    /// Creates a greater-than operation.
    #[must_use]
    pub fn gt<V: ToSqlValue>(column: &str, value: V) -> Self {
        Self::GreaterThan {
            column: column.to_string(),
            value: value.to_sql_value(),
        }
    }

    /// Creates a range operation. A `NULL` bound counts as missing.
    #[must_use]
    pub fn between<L: ToSqlValue, U: ToSqlValue>(column: &str, lower: L, upper: U) -> Self {
        Self::Between {
            column: column.to_string(),
            lower: bound(lower),
            upper: bound(upper),
        }
    }

    /// Creates an IN operation.
    #[must_use]
    pub fn in_list<V, I>(column: &str, values: I) -> Self
    where
        V: ToSqlValue,
        I: IntoIterator<Item = V>,
    {
        Self::In {
            column: column.to_string(),
            values: Some(values.into_iter().map(ToSqlValue::to_sql_value).collect()),
            negated: false,
        }
    }

    /// Creates a NOT IN operation.
    #[must_use]
    pub fn not_in_list<V, I>(column: &str, values: I) -> Self
    where
        V: ToSqlValue,
        I: IntoIterator<Item = V>,
    {
        Self::In {
            column: column.to_string(),
            values: Some(values.into_iter().map(ToSqlValue::to_sql_value).collect()),
            negated: true,
        }
    }

    /// Creates a substring match operation.
    #[must_use]
    pub fn like(column: &str, value: &str) -> Self {
        Self::Like {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Returns the column this operation constrains.
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::Equals { column, .. }
            | Self::LessThan { column, .. }
            | Self::GreaterThan { column, .. }
            | Self::Between { column, .. }
            | Self::In { column, .. }
            | Self::Like { column, .. } => column,
        }
    }

    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Equals { .. } => OperationKind::Equals,
            Self::LessThan { .. } => OperationKind::LessThan,
            Self::GreaterThan { .. } => OperationKind::GreaterThan,
            Self::Between { .. } => OperationKind::Between,
            Self::In { .. } => OperationKind::In,
            Self::Like { .. } => OperationKind::Like,
        }
    }
}

fn bound<V: ToSqlValue>(value: V) -> Option<SqlValue> {
    match value.to_sql_value() {
        SqlValue::Null => None,
        v => Some(v),
    }
}

/// Tag naming a [`BooleanOperation`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `equals`
    Equals,
    /// `less_than`
    LessThan,
    /// `greater_than`
    GreaterThan,
    /// `between`
    Between,
    /// `in`
    In,
    /// `like`
    Like,
}

impl OperationKind {
    /// Returns the tag as written in operation data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::LessThan => "less_than",
            Self::GreaterThan => "greater_than",
            Self::Between => "between",
            Self::In => "in",
            Self::Like => "like",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = WhereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Self::Equals),
            "less_than" => Ok(Self::LessThan),
            "greater_than" => Ok(Self::GreaterThan),
            "between" => Ok(Self::Between),
            "in" => Ok(Self::In),
            "like" => Ok(Self::Like),
            other => Err(WhereError::UnsupportedOperation(other.to_string())),
        }
    }
}
