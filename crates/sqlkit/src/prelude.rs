//! Convenient imports for typical `sqlkit` usage.
//!
//! ```ignore
//! use sqlkit::prelude::*;
//! ```

pub use crate::{BuildError, BuildResult, Head, Limit, OrderBy, Query, SortDir, Where, query};
pub use crate::{StaticTable, Table, TableRef};
