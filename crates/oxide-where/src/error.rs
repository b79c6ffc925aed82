//! Error types for WHERE clause building.

use thiserror::Error;

/// Errors raised while turning operation data into predicates.
///
/// The typed append methods on [`WhereBuilder`](crate::WhereBuilder) never
/// fail. These errors only come from decoding operations that arrive as
/// data.
#[derive(Debug, Error)]
pub enum WhereError {
    /// The operation tag does not name a supported operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A value cannot be used as a bind value for the given column.
    #[error("invalid value for column '{column}': {reason}")]
    InvalidValue {
        /// Column the value was meant for.
        column: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Malformed JSON input.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for WHERE clause operations.
pub type Result<T> = std::result::Result<T, WhereError>;
