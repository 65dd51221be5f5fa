//! Clause legality checks.

use crate::clause::{Clause, ClauseSet};
use crate::error::{BuildError, BuildResult};
use crate::head::Head;

/// Check every clause against the head's permitted set.
///
/// Clauses are kept in insertion order and never deduplicated. The first
/// clause whose kind is not permitted fails the whole set with
/// [`BuildError::IllegalClause`]; nothing is dropped silently.
pub fn validate<I>(head: &Head<'_>, clauses: I) -> BuildResult<ClauseSet>
where
    I: IntoIterator<Item = Clause>,
{
    let head_kind = head.kind();
    let clauses = clauses.into_iter();
    let mut kept = Vec::with_capacity(clauses.size_hint().0);

    for clause in clauses {
        let kind = clause.kind();
        if !head_kind.permits(kind) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "sqlkit.build",
                head = %head_kind,
                clause = %kind,
                "rejected clause"
            );
            return Err(BuildError::illegal_clause(kind, head_kind));
        }
        kept.push(clause);
    }

    Ok(ClauseSet::from_validated(kept))
}
