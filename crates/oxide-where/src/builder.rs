//! Predicate accumulator and WHERE clause renderer.

use tracing::{debug, trace};

use crate::operation::BooleanOperation;
use crate::value::{SqlValue, ToSqlValue};

/// One rendered predicate together with the values for its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    sql: String,
    params: Vec<SqlValue>,
}

impl Predicate {
    const fn new(sql: String, params: Vec<SqlValue>) -> Self {
        Self { sql, params }
    }

    /// Returns the SQL fragment, e.g. `age BETWEEN ? AND ?`.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bind values in placeholder order, as appended.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }
}

/// Accumulates predicates and renders them as a conjunctive WHERE clause.
///
/// Every predicate is stored together with its own bind values, so the
/// `?` placeholders of [`where_clause`](Self::where_clause) and the entries
/// of [`values`](Self::values) always line up.
///
/// # Example
///
/// ```rust
/// use oxide_where::{SqlValue, WhereBuilder};
///
/// let mut w = WhereBuilder::new();
/// w.eq("a", 1).gt("b", 2);
///
/// let sql = format!("SELECT * FROM t{} ORDER BY id", w.where_clause());
/// assert_eq!(sql, "SELECT * FROM t WHERE a = ? AND b > ? ORDER BY id");
/// assert_eq!(w.values(), vec![SqlValue::Int(1), SqlValue::Int(2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhereBuilder {
    predicates: Vec<Predicate>,
}

impl WhereBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Creates a builder by adding each operation in order.
    #[must_use]
    pub fn from_operations<I>(ops: I) -> Self
    where
        I: IntoIterator<Item = BooleanOperation>,
    {
        let mut builder = Self::new();
        builder.extend(ops);
        builder
    }

    /// Adds `column = ?`, or `column IS NULL` when `value` is NULL.
    pub fn eq<V: ToSqlValue>(&mut self, column: &str, value: V) -> &mut Self {
        self.add(BooleanOperation::eq(column, value))
    }

    /// Adds `column <> ?`, or `column IS NOT NULL` when `value` is NULL.
    pub fn not_eq<V: ToSqlValue>(&mut self, column: &str, value: V) -> &mut Self {
        self.add(BooleanOperation::not_eq(column, value))
    }

    /// Adds `column < ?`. A NULL value is bound as is.
    pub fn lt<V: ToSqlValue>(&mut self, column: &str, value: V) -> &mut Self {
        self.add(BooleanOperation::lt(column, value))
    }

    /// Adds `column > ?`. A NULL value is bound as is.
    pub fn gt<V: ToSqlValue>(&mut self, column: &str, value: V) -> &mut Self {
        self.add(BooleanOperation::gt(column, value))
    }

    /// Adds an inclusive range on `column`.
    ///
    /// With only one bound this degrades to `>=` or `<=`. With neither
    /// bound nothing is added, so the result is "no filter", not "no rows".
    pub fn between<L: ToSqlValue, U: ToSqlValue>(
        &mut self,
        column: &str,
        lower: L,
        upper: U,
    ) -> &mut Self {
        self.add(BooleanOperation::between(column, lower, upper))
    }

    /// Adds `column IN (?, ...)`.
    ///
    /// An empty list adds nothing, so the result is "no filter", not
    /// "no rows".
    pub fn in_list<V, I>(&mut self, column: &str, values: I) -> &mut Self
    where
        V: ToSqlValue,
        I: IntoIterator<Item = V>,
    {
        self.add(BooleanOperation::in_list(column, values))
    }

    /// Adds `column NOT IN (?, ...)`. An empty list adds nothing.
    pub fn not_in_list<V, I>(&mut self, column: &str, values: I) -> &mut Self
    where
        V: ToSqlValue,
        I: IntoIterator<Item = V>,
    {
        self.add(BooleanOperation::not_in_list(column, values))
    }

    /// Adds `column IN (?, ...)` when a list is given.
    ///
    /// `None` behaves like an empty list and adds nothing.
    pub fn in_list_opt<V, I>(&mut self, column: &str, values: Option<I>) -> &mut Self
    where
        V: ToSqlValue,
        I: IntoIterator<Item = V>,
    {
        self.add(BooleanOperation::In {
            column: column.to_string(),
            values: values.map(sql_values::<V, I>),
            negated: false,
        })
    }

    /// Adds `column NOT IN (?, ...)` when a list is given. `None` adds nothing.
    pub fn not_in_list_opt<V, I>(&mut self, column: &str, values: Option<I>) -> &mut Self
    where
        V: ToSqlValue,
        I: IntoIterator<Item = V>,
    {
        self.add(BooleanOperation::In {
            column: column.to_string(),
            values: values.map(sql_values::<V, I>),
            negated: true,
        })
    }

    /// Adds `column LIKE ?` bound to `%value%`.
    ///
    /// `%` and `_` inside `value` keep their wildcard meaning.
    pub fn like(&mut self, column: &str, value: &str) -> &mut Self {
        self.add(BooleanOperation::like(column, value))
    }

    /// Adds a pre-built operation.
    pub fn add(&mut self, op: BooleanOperation) -> &mut Self {
        if let Some(predicate) = render(op) {
            trace!(
                sql = %predicate.sql,
                params = predicate.params.len(),
                "Appending predicate"
            );
            self.predicates.push(predicate);
        }
        self
    }

    /// Returns the predicates in the order they were added.
    ///
    /// Values are returned exactly as appended, before normalization.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns the number of predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` when no predicate has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns the predicates joined with `AND`, without the `WHERE`
    /// keyword. Empty when there are no predicates.
    #[must_use]
    pub fn where_expression(&self) -> String {
        self.predicates
            .iter()
            .map(Predicate::sql)
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Returns ` WHERE <expression>`, or an empty string when there are no
    /// predicates.
    ///
    /// The leading space and the missing trailing space are intentional:
    /// the result can be placed right after a table name, as in
    /// `format!("SELECT c FROM t{} ORDER BY x", w.where_clause())`.
    #[must_use]
    pub fn where_clause(&self) -> String {
        if self.predicates.is_empty() {
            return String::new();
        }
        format!(" WHERE {}", self.where_expression())
    }

    /// Returns the bind values in placeholder order.
    ///
    /// Each value goes through [`SqlValue::normalized`]. The stored
    /// predicates are not modified.
    #[must_use]
    pub fn values(&self) -> Vec<SqlValue> {
        self.predicates
            .iter()
            .flat_map(|p| p.params.iter())
            .map(SqlValue::normalized)
            .collect()
    }

    /// Returns the WHERE clause and its bind values.
    #[must_use]
    pub fn build(&self) -> (String, Vec<SqlValue>) {
        (self.where_clause(), self.values())
    }
}

impl Extend<BooleanOperation> for WhereBuilder {
    fn extend<T: IntoIterator<Item = BooleanOperation>>(&mut self, iter: T) {
        for op in iter {
            self.add(op);
        }
    }
}

impl FromIterator<BooleanOperation> for WhereBuilder {
    fn from_iter<T: IntoIterator<Item = BooleanOperation>>(iter: T) -> Self {
        Self::from_operations(iter)
    }
}

fn sql_values<V: ToSqlValue, I: IntoIterator<Item = V>>(values: I) -> Vec<SqlValue> {
    values.into_iter().map(ToSqlValue::to_sql_value).collect()
}

/// Renders one operation, or `None` when it constrains nothing.
fn render(op: BooleanOperation) -> Option<Predicate> {
    match op {
        BooleanOperation::Equals {
            column,
            value,
            negated,
        } => Some(render_equals(&column, value, negated)),
        BooleanOperation::LessThan { column, value } => {
            Some(Predicate::new(format!("{column} < ?"), vec![value]))
        }
        BooleanOperation::GreaterThan { column, value } => {
            Some(Predicate::new(format!("{column} > ?"), vec![value]))
        }
        BooleanOperation::Between {
            column,
            lower,
            upper,
        } => render_between(&column, lower, upper),
        BooleanOperation::In {
            column,
            values,
            negated,
        } => render_in(&column, values.unwrap_or_default(), negated),
        BooleanOperation::Like { column, value } => Some(Predicate::new(
            format!("{column} LIKE ?"),
            vec![SqlValue::Text(format!("%{value}%"))],
        )),
    }
}

fn render_equals(column: &str, value: SqlValue, negated: bool) -> Predicate {
    match (value, negated) {
        (SqlValue::Null, true) => Predicate::new(format!("{column} IS NOT NULL"), vec![]),
        (SqlValue::Null, false) => Predicate::new(format!("{column} IS NULL"), vec![]),
        (value, negated) => {
            let op = if negated { "<>" } else { "=" };
            Predicate::new(format!("{column} {op} ?"), vec![value])
        }
    }
}

fn render_between(
    column: &str,
    lower: Option<SqlValue>,
    upper: Option<SqlValue>,
) -> Option<Predicate> {
    // A NULL bound is as good as a missing one.
    let lower = lower.filter(|v| !v.is_null());
    let upper = upper.filter(|v| !v.is_null());

    match (lower, upper) {
        (Some(lower), Some(upper)) => Some(Predicate::new(
            format!("{column} BETWEEN ? AND ?"),
            vec![lower, upper],
        )),
        (Some(lower), None) => Some(Predicate::new(format!("{column} >= ?"), vec![lower])),
        (None, Some(upper)) => Some(Predicate::new(format!("{column} <= ?"), vec![upper])),
        (None, None) => {
            debug!(column, "BETWEEN without bounds, nothing appended");
            None
        }
    }
}

fn render_in(column: &str, values: Vec<SqlValue>, negated: bool) -> Option<Predicate> {
    if values.is_empty() {
        debug!(column, negated, "IN list is empty, nothing appended");
        return None;
    }

    let keyword = if negated { "NOT IN" } else { "IN" };
    let placeholders: Vec<&str> = values.iter().map(|_| SqlValue::placeholder()).collect();
    Some(Predicate::new(
        format!("{column} {keyword} ({})", placeholders.join(", ")),
        values,
    ))
}
