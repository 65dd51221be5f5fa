//! Head statements: the single SELECT/UPDATE/DELETE that opens a statement.

use crate::clause::ClauseKind;
use crate::table::TableRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`Head`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Select,
    Update,
    Delete,
}

impl StatementKind {
    /// Clause kinds legal after this head.
    pub fn permitted(self) -> &'static [ClauseKind] {
        match self {
            StatementKind::Select => &[ClauseKind::Where, ClauseKind::OrderBy, ClauseKind::Limit],
            StatementKind::Update | StatementKind::Delete => &[ClauseKind::Where],
        }
    }

    pub fn permits(self, kind: ClauseKind) -> bool {
        self.permitted().contains(&kind)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The head statement of a build.
///
/// The table is borrowed for as long as the head lives.
#[derive(Debug, Clone)]
pub enum Head<'t> {
    Select {
        /// `None` renders `*`.
        columns: Option<Vec<String>>,
        from: &'t dyn TableRef,
    },
    Update {
        from: &'t dyn TableRef,
        assignments: Vec<String>,
    },
    Delete {
        from: &'t dyn TableRef,
    },
}

impl<'t> Head<'t> {
    /// `SELECT * FROM <table>`
    pub fn select(from: &'t dyn TableRef) -> Self {
        Head::Select {
            columns: None,
            from,
        }
    }

    /// `SELECT <columns> FROM <table>`
    pub fn select_columns<I, S>(columns: I, from: &'t dyn TableRef) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Head::Select {
            columns: Some(columns.into_iter().map(Into::into).collect()),
            from,
        }
    }

    /// `UPDATE FROM <table> SET <assignments>`
    pub fn update<I, S>(from: &'t dyn TableRef, assignments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Head::Update {
            from,
            assignments: assignments.into_iter().map(Into::into).collect(),
        }
    }

    /// `DELETE FROM <table>`
    pub fn delete(from: &'t dyn TableRef) -> Self {
        Head::Delete { from }
    }

    pub fn kind(&self) -> StatementKind {
        match self {
            Head::Select { .. } => StatementKind::Select,
            Head::Update { .. } => StatementKind::Update,
            Head::Delete { .. } => StatementKind::Delete,
        }
    }

    pub fn table(&self) -> &'t dyn TableRef {
        match self {
            Head::Select { from, .. } | Head::Update { from, .. } | Head::Delete { from } => *from,
        }
    }
}
