//! # sqlkit
//!
//! A small typed builder for SELECT / UPDATE / DELETE statements.
//!
//! ## Features
//!
//! - **Closed clause set**: WHERE, ORDER BY and LIMIT are enum variants, not strings
//! - **Checked composition**: clauses that make no sense for the head (ORDER BY on
//!   UPDATE, LIMIT on DELETE) are rejected, never dropped
//! - **Deterministic output**: fixed segment order, repeated WHEREs are AND-ed
//! - **No magic**: caller strings are inserted verbatim; this is a formatting
//!   helper, not an injection guard
//!
//! ## Usage
//!
//! ```rust
//! use sqlkit::{Head, Limit, OrderBy, StaticTable, Where, query};
//!
//! struct Photo;
//!
//! impl StaticTable for Photo {
//!     const NAME: &'static str = "photos";
//! }
//!
//! // SELECT
//! let sql = query![
//!     Head::select_columns(["title"], &Photo),
//!     Where::new("id = 1"),
//!     OrderBy::desc("id"),
//!     Limit::new(5)?,
//! ]?;
//! assert_eq!(sql, "SELECT title FROM photos WHERE id = 1 ORDER BY id DESC LIMIT 5;");
//!
//! // UPDATE
//! let sql = query![Head::update(&Photo, ["is_deleted = 1"]), Where::new("id = 1")]?;
//! assert_eq!(sql, "UPDATE FROM photos SET is_deleted = 1 WHERE id = 1;");
//!
//! // ORDER BY is not allowed after UPDATE
//! let err = query![Head::update(&Photo, ["is_deleted = 1"]), OrderBy::new("id")];
//! assert!(err.unwrap_err().is_illegal_clause());
//! # Ok::<(), sqlkit::BuildError>(())
//! ```

pub mod clause;
pub mod error;
pub mod head;
pub mod prelude;
pub mod query;
pub mod render;
pub mod table;
pub mod validate;

pub use clause::{Clause, ClauseKind, ClauseSet, Limit, OrderBy, SortDir, Where};
pub use error::{BuildError, BuildResult};
pub use head::{Head, StatementKind};
pub use query::{Part, Query, assemble, build};
pub use render::{RenderedStatement, render};
pub use table::{StaticTable, Table, TableRef};
pub use validate::validate;
