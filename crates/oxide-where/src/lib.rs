//! # oxide-where
//!
//! Incremental, parameterized SQL `WHERE` clauses.
//!
//! This crate provides:
//! - [`WhereBuilder`], an append-only list of predicates rendered as a
//!   single `AND`-joined clause
//! - [`BooleanOperation`], the predicate kinds it understands
//! - [`SqlValue`], bind values kept in placeholder order
//!
//! ## Building a clause
//!
//! ```rust
//! use oxide_where::WhereBuilder;
//!
//! let mut w = WhereBuilder::new();
//! w.eq("active", true)
//!     .between("age", 18, None::<i32>)
//!     .in_list("role", ["admin", "staff"])
//!     .not_eq("deleted_at", None::<String>);
//!
//! assert_eq!(
//!     w.where_clause(),
//!     " WHERE active = ? AND age >= ? AND role IN (?, ?) AND deleted_at IS NOT NULL"
//! );
//! assert_eq!(w.values().len(), 4);
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Values never enter the SQL text; only `?` placeholders do:
//!
//! ```rust
//! use oxide_where::{SqlValue, WhereBuilder};
//!
//! let user_input = "'; DROP TABLE users; --";
//! let mut w = WhereBuilder::new();
//! w.eq("name", user_input);
//!
//! assert_eq!(w.where_clause(), " WHERE name = ?");
//! assert_eq!(w.values(), vec![SqlValue::Text(user_input.to_string())]);
//! ```
//!
//! Column names are written into the SQL as given and must come from
//! trusted code.
//!
//! ## Features
//!
//! - `json` (default): decode operations from JSON with
//!   [`WhereBuilder::from_json`].
//! - `sqlite` (default): bind exported values onto `sqlx` SQLite queries.

mod builder;
mod error;
#[cfg(feature = "json")]
mod json;
pub mod operation;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod value;

pub use builder::{Predicate, WhereBuilder};
pub use error::{Result, WhereError};
pub use operation::{BooleanOperation, OperationKind};
pub use value::{SqlValue, ToSqlValue};
