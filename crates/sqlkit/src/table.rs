//! Table references.
//!
//! The builder only ever needs a table *name*. [`TableRef`] is that capability;
//! callers pick how they provide it:
//!
//! - type-level: implement [`StaticTable`] on a marker type
//! - instance-level: use the [`Table`] value type
//!
//! ```rust
//! use sqlkit::{StaticTable, Table, TableRef};
//!
//! struct Photo;
//!
//! impl StaticTable for Photo {
//!     const NAME: &'static str = "photos";
//! }
//!
//! const BOOKS: Table = Table::new("books");
//!
//! assert_eq!(Photo.name(), "photos");
//! assert_eq!(BOOKS.name(), "books");
//! assert_eq!(Table::of::<Photo>().name(), "photos");
//! ```

use std::borrow::Cow;
use std::fmt;

/// Anything that can name the target of a FROM/UPDATE/DELETE.
///
/// The name is inserted into the statement verbatim.
pub trait TableRef: Sync {
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn TableRef + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TableRef").field(&self.name()).finish()
    }
}

/// Type-level table name.
pub trait StaticTable {
    const NAME: &'static str;
}

impl<T: StaticTable + Sync> TableRef for T {
    fn name(&self) -> &str {
        T::NAME
    }
}

/// Instance-level table name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: Cow<'static, str>,
}

impl Table {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Table whose name is only known at runtime.
    pub fn owned(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    /// Lift a [`StaticTable`] type into a value.
    pub const fn of<T: StaticTable>() -> Self {
        Self::new(T::NAME)
    }
}

impl TableRef for Table {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
