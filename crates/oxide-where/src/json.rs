//! Decoding operations from JSON.
//!
//! Operations built elsewhere can be handed over as a JSON array:
//!
//! ```rust
//! use oxide_where::WhereBuilder;
//!
//! let w = WhereBuilder::from_json(
//!     r#"[
//!         {"op": "equals", "column": "id", "value": 5},
//!         {"op": "in", "column": "status", "values": ["A", "B"], "negated": true}
//!     ]"#,
//! )
//! .unwrap();
//! assert_eq!(w.where_clause(), " WHERE id = ? AND status NOT IN (?, ?)");
//! ```

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::builder::WhereBuilder;
use crate::error::{Result, WhereError};
use crate::operation::{BooleanOperation, OperationKind};
use crate::value::SqlValue;

#[derive(Debug, Deserialize)]
struct WireOperation {
    op: String,
    column: String,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    lower: Option<Value>,
    #[serde(default)]
    upper: Option<Value>,
    #[serde(default)]
    values: Option<Vec<Value>>,
    #[serde(default)]
    negated: bool,
}

impl BooleanOperation {
    /// Decodes one operation object.
    ///
    /// # Errors
    ///
    /// Returns [`WhereError::UnsupportedOperation`] for an unknown `op` tag,
    /// [`WhereError::InvalidValue`] when a value is not a usable scalar and
    /// [`WhereError::Json`] when the object is malformed.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let wire: WireOperation = serde_json::from_value(value)?;
        wire.into_operation()
    }
}

impl WhereBuilder {
    /// Creates a builder from a JSON array of operation objects.
    ///
    /// Either every operation is added or, on error, none is.
    ///
    /// # Errors
    ///
    /// See [`BooleanOperation::from_json_value`].
    pub fn from_json(json: &str) -> Result<Self> {
        let wire: Vec<WireOperation> = serde_json::from_str(json)?;
        let ops = wire
            .into_iter()
            .map(WireOperation::into_operation)
            .collect::<Result<Vec<_>>>()?;
        debug!(count = ops.len(), "Decoded operations from JSON");
        Ok(Self::from_operations(ops))
    }
}

impl WireOperation {
    fn into_operation(self) -> Result<BooleanOperation> {
        let kind: OperationKind = self.op.parse()?;
        let column = self.column;

        let op = match kind {
            OperationKind::Equals => BooleanOperation::Equals {
                value: optional_scalar(&column, self.value)?,
                negated: self.negated,
                column,
            },
            OperationKind::LessThan => BooleanOperation::LessThan {
                value: optional_scalar(&column, self.value)?,
                column,
            },
            OperationKind::GreaterThan => BooleanOperation::GreaterThan {
                value: optional_scalar(&column, self.value)?,
                column,
            },
            OperationKind::Between => BooleanOperation::Between {
                lower: self.lower.map(|v| scalar(&column, v)).transpose()?,
                upper: self.upper.map(|v| scalar(&column, v)).transpose()?,
                column,
            },
            OperationKind::In => BooleanOperation::In {
                values: self
                    .values
                    .map(|vs| {
                        vs.into_iter()
                            .map(|v| scalar(&column, v))
                            .collect::<Result<Vec<_>>>()
                    })
                    .transpose()?,
                negated: self.negated,
                column,
            },
            OperationKind::Like => match self.value {
                Some(Value::String(value)) => BooleanOperation::Like { column, value },
                Some(_) => return Err(invalid(&column, "LIKE pattern must be a string")),
                None => return Err(invalid(&column, "LIKE requires a value")),
            },
        };
        Ok(op)
    }
}

fn optional_scalar(column: &str, value: Option<Value>) -> Result<SqlValue> {
    value.map_or(Ok(SqlValue::Null), |v| scalar(column, v))
}

fn scalar(column: &str, value: Value) -> Result<SqlValue> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Bool(b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(SqlValue::Int(i))
            } else {
                n.as_f64()
                    .map(SqlValue::Float)
                    .ok_or_else(|| invalid(column, "number out of range"))
            }
        }
        Value::String(s) => Ok(SqlValue::Text(s)),
        Value::Array(_) | Value::Object(_) => Err(invalid(column, "expected a scalar value")),
    }
}

fn invalid(column: &str, reason: &str) -> WhereError {
    WhereError::InvalidValue {
        column: column.to_string(),
        reason: reason.to_string(),
    }
}
