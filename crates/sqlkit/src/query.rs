//! Build entry points.
//!
//! Three surfaces, one pipeline (`Collected → Validated → Rendered`):
//!
//! - [`build`]: explicit head + clause list
//! - [`assemble`] / [`query!`](crate::query!): a flat list of parts that must
//!   contain exactly one head
//! - [`Query`]: fluent builder
//!
//! ```rust
//! use sqlkit::{Head, Limit, OrderBy, Query, Table, Where, build};
//!
//! static PHOTOS: Table = Table::new("photos");
//!
//! let sql = build(
//!     Head::select_columns(["title"], &PHOTOS),
//!     vec![
//!         Where::new("id = 1").into(),
//!         OrderBy::desc("id").into(),
//!         Limit::new(5)?.into(),
//!     ],
//! )?;
//! assert_eq!(sql, "SELECT title FROM photos WHERE id = 1 ORDER BY id DESC LIMIT 5;");
//!
//! let same = Query::new(Head::select_columns(["title"], &PHOTOS))
//!     .filter("id = 1")
//!     .order_by_desc("id")
//!     .limit(5)?
//!     .build()?;
//! assert_eq!(sql, same);
//! # Ok::<(), sqlkit::BuildError>(())
//! ```

use crate::clause::{Clause, Limit, OrderBy, SortDir, Where};
use crate::error::{BuildError, BuildResult};
use crate::head::Head;
use crate::render::{RenderedStatement, render};
use crate::validate::validate;

/// Validate `clauses` against `head`, then render.
///
/// On failure no SQL is produced.
pub fn build<I>(head: Head<'_>, clauses: I) -> BuildResult<RenderedStatement>
where
    I: IntoIterator<Item = Clause>,
{
    let set = validate(&head, clauses)?;
    let sql = render(&head, &set);

    #[cfg(feature = "tracing")]
    trace_built(&head, &set, &sql);

    Ok(RenderedStatement::new(sql))
}

#[cfg(feature = "tracing")]
const TRACE_SQL_MAX_CHARS: usize = 200;

#[cfg(feature = "tracing")]
fn trace_built(head: &Head<'_>, set: &crate::clause::ClauseSet, sql: &str) {
    use crate::clause::ClauseKind;

    let limits = set.count_of(ClauseKind::Limit);
    if limits > 1 {
        tracing::warn!(
            target: "sqlkit.build",
            limits,
            "multiple LIMIT clauses rendered as a comma list"
        );
    }

    let shown = match sql.char_indices().nth(TRACE_SQL_MAX_CHARS) {
        Some((idx, _)) => format!("{}...", &sql[..idx]),
        None => sql.to_string(),
    };
    tracing::debug!(
        target: "sqlkit.build",
        kind = %head.kind(),
        clauses = set.len(),
        sql = %shown,
        "built statement"
    );
}

/// One element of a declarative statement: the head or a clause.
#[derive(Debug, Clone)]
pub enum Part<'t> {
    Head(Head<'t>),
    Clause(Clause),
}

impl<'t> From<Head<'t>> for Part<'t> {
    fn from(head: Head<'t>) -> Self {
        Part::Head(head)
    }
}

impl From<Clause> for Part<'_> {
    fn from(clause: Clause) -> Self {
        Part::Clause(clause)
    }
}

impl From<Where> for Part<'_> {
    fn from(w: Where) -> Self {
        Part::Clause(w.into())
    }
}

impl From<OrderBy> for Part<'_> {
    fn from(o: OrderBy) -> Self {
        Part::Clause(o.into())
    }
}

impl From<Limit> for Part<'_> {
    fn from(l: Limit) -> Self {
        Part::Clause(l.into())
    }
}

/// Build from a flat list of parts.
///
/// Exactly one [`Part::Head`] is required, at any position; otherwise
/// [`BuildError::MissingOrDuplicateHead`] is returned before any validation.
/// Clause order is preserved.
pub fn assemble<'t, I>(parts: I) -> BuildResult<RenderedStatement>
where
    I: IntoIterator<Item = Part<'t>>,
{
    let mut heads = Vec::with_capacity(1);
    let mut clauses = Vec::new();
    for part in parts {
        match part {
            Part::Head(h) => heads.push(h),
            Part::Clause(c) => clauses.push(c),
        }
    }

    if heads.len() != 1 {
        return Err(BuildError::MissingOrDuplicateHead { count: heads.len() });
    }
    let head = heads.remove(0);
    build(head, clauses)
}

/// Declarative statement literal.
///
/// Each argument is anything convertible into a [`Part`]. Expands to a call to
/// [`assemble`].
///
/// ```rust
/// use sqlkit::{Head, Table, Where, query};
///
/// static PHOTOS: Table = Table::new("photos");
///
/// let sql = query![
///     Head::delete(&PHOTOS),
///     Where::new("id = 1"),
/// ]?;
/// assert_eq!(sql, "DELETE FROM photos WHERE id = 1;");
/// # Ok::<(), sqlkit::BuildError>(())
/// ```
#[macro_export]
macro_rules! query {
    ($($part:expr),* $(,)?) => {
        $crate::assemble(::std::vec![$($crate::Part::from($part)),*])
    };
}

/// Fluent statement builder.
///
/// Clauses are only checked in [`Query::build`], so an illegal clause is
/// reported there rather than dropped.
#[derive(Debug, Clone)]
pub struct Query<'t> {
    head: Head<'t>,
    clauses: Vec<Clause>,
}

impl<'t> Query<'t> {
    pub fn new(head: Head<'t>) -> Self {
        Self {
            head,
            clauses: Vec::new(),
        }
    }

    /// Append any clause.
    pub fn push(mut self, clause: impl Into<Clause>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    /// Append a raw WHERE predicate (AND-ed with earlier ones).
    pub fn filter(self, predicate: impl Into<String>) -> Self {
        self.push(Where::new(predicate))
    }

    /// Append an ascending ORDER BY entry.
    pub fn order_by(self, column: impl Into<String>) -> Self {
        self.push(OrderBy::new(column))
    }

    /// Append a descending ORDER BY entry.
    pub fn order_by_desc(self, column: impl Into<String>) -> Self {
        self.push(OrderBy::with_dir(column, SortDir::Desc))
    }

    /// Append a LIMIT. Fails immediately when `row_count <= 0`.
    pub fn limit(self, row_count: i64) -> BuildResult<Self> {
        Ok(self.push(Limit::new(row_count)?))
    }

    pub fn head(&self) -> &Head<'t> {
        &self.head
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn build(self) -> BuildResult<RenderedStatement> {
        build(self.head, self.clauses)
    }
}
