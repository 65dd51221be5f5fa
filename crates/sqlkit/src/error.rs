//! Error types for sqlkit

use crate::clause::ClauseKind;
use crate::head::StatementKind;
use thiserror::Error;

/// Result type alias for sqlkit operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while assembling a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A clause is not permitted after the chosen head statement.
    #[error("{offending_kind} clause is not permitted in {head_kind} statements")]
    IllegalClause {
        offending_kind: ClauseKind,
        head_kind: StatementKind,
    },

    /// The declarative surface got zero or several head statements.
    #[error("expected exactly one head statement, got {count}")]
    MissingOrDuplicateHead { count: usize },

    /// LIMIT row count must be positive.
    #[error("LIMIT row count must be > 0, got {0}")]
    InvalidLimit(i64),
}

impl BuildError {
    /// Create an illegal clause error
    pub fn illegal_clause(offending_kind: ClauseKind, head_kind: StatementKind) -> Self {
        Self::IllegalClause {
            offending_kind,
            head_kind,
        }
    }

    /// Check if this is an illegal clause error
    pub fn is_illegal_clause(&self) -> bool {
        matches!(self, Self::IllegalClause { .. })
    }

    /// Check if this is a head count error
    pub fn is_head_count(&self) -> bool {
        matches!(self, Self::MissingOrDuplicateHead { .. })
    }

    /// Check if this is an invalid LIMIT error
    pub fn is_invalid_limit(&self) -> bool {
        matches!(self, Self::InvalidLimit(_))
    }
}
