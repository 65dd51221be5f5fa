//! Modifying clauses: WHERE, ORDER BY, LIMIT.
//!
//! Clause contents are opaque to the builder and inserted verbatim.

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`Clause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    Where,
    OrderBy,
    Limit,
}

impl ClauseKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ClauseKind::Where => "WHERE",
            ClauseKind::OrderBy => "ORDER BY",
            ClauseKind::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A raw boolean predicate.
///
/// **Warning**: the predicate is not parsed or escaped. Only pass trusted SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Where {
    predicate: String,
}

impl Where {
    pub fn new(predicate: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }
}

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// A single ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    column: String,
    dir: SortDir,
}

impl OrderBy {
    /// Ascending sort on `column`.
    pub fn new(column: impl Into<String>) -> Self {
        Self::with_dir(column, SortDir::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::with_dir(column, SortDir::Desc)
    }

    pub fn with_dir(column: impl Into<String>, dir: SortDir) -> Self {
        Self {
            column: column.into(),
            dir,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn dir(&self) -> SortDir {
        self.dir
    }

    /// Asc is the SQL default, so only Desc gets a suffix.
    pub(crate) fn write_sql(&self, out: &mut String) {
        out.push_str(&self.column);
        if self.dir == SortDir::Desc {
            out.push_str(" DESC");
        }
    }
}

/// LIMIT row count. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limit {
    row_count: u64,
}

impl Limit {
    /// Fails with [`BuildError::InvalidLimit`] when `row_count <= 0`.
    pub fn new(row_count: i64) -> BuildResult<Self> {
        if row_count <= 0 {
            return Err(BuildError::InvalidLimit(row_count));
        }
        Ok(Self {
            row_count: row_count as u64,
        })
    }

    pub fn row_count(&self) -> u64 {
        self.row_count
    }
}

/// One modifying clause attached after the head statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Where(Where),
    OrderBy(OrderBy),
    Limit(Limit),
}

impl Clause {
    pub fn kind(&self) -> ClauseKind {
        match self {
            Clause::Where(_) => ClauseKind::Where,
            Clause::OrderBy(_) => ClauseKind::OrderBy,
            Clause::Limit(_) => ClauseKind::Limit,
        }
    }
}

impl From<Where> for Clause {
    fn from(w: Where) -> Self {
        Clause::Where(w)
    }
}

impl From<OrderBy> for Clause {
    fn from(o: OrderBy) -> Self {
        Clause::OrderBy(o)
    }
}

impl From<Limit> for Clause {
    fn from(l: Limit) -> Self {
        Clause::Limit(l)
    }
}

/// Validated, insertion-ordered clauses.
///
/// Only [`crate::validate`] produces a non-empty set, so every clause here is
/// legal for the head it was validated against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_validated(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn wheres(&self) -> impl Iterator<Item = &Where> {
        self.clauses.iter().filter_map(|c| match c {
            Clause::Where(w) => Some(w),
            _ => None,
        })
    }

    pub fn order_bys(&self) -> impl Iterator<Item = &OrderBy> {
        self.clauses.iter().filter_map(|c| match c {
            Clause::OrderBy(o) => Some(o),
            _ => None,
        })
    }

    pub fn limits(&self) -> impl Iterator<Item = &Limit> {
        self.clauses.iter().filter_map(|c| match c {
            Clause::Limit(l) => Some(l),
            _ => None,
        })
    }

    pub fn count_of(&self, kind: ClauseKind) -> usize {
        self.clauses.iter().filter(|c| c.kind() == kind).count()
    }
}
