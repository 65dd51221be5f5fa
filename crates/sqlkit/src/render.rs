//! Canonical SQL rendering.
//!
//! Segment order is fixed: head, WHERE, ORDER BY, LIMIT, then `;`. Caller
//! strings (table names, columns, predicates, assignments) are inserted
//! verbatim with no quoting or escaping.

use crate::clause::ClauseSet;
use crate::head::Head;
use serde::{Serialize, Serializer};
use std::fmt;

/// Render a validated statement.
///
/// Rendering does not re-check legality: pass a [`ClauseSet`] produced by
/// [`crate::validate`] for the same head.
pub fn render(head: &Head<'_>, clauses: &ClauseSet) -> String {
    let mut out = String::with_capacity(64);

    write_head(head, &mut out);

    let mut wheres = clauses.wheres().peekable();
    if wheres.peek().is_some() {
        out.push_str(" WHERE ");
        for (i, w) in wheres.enumerate() {
            if i > 0 {
                out.push_str(" AND ");
            }
            out.push_str(w.predicate());
        }
    }

    let mut order_bys = clauses.order_bys().peekable();
    if order_bys.peek().is_some() {
        out.push_str(" ORDER BY ");
        for (i, o) in order_bys.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            o.write_sql(&mut out);
        }
    }

    let mut limits = clauses.limits().peekable();
    if limits.peek().is_some() {
        out.push_str(" LIMIT ");
        for (i, l) in limits.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&l.row_count().to_string());
        }
    }

    out.push(';');
    out
}

fn write_head(head: &Head<'_>, out: &mut String) {
    match head {
        Head::Select { columns, from } => {
            out.push_str("SELECT ");
            match columns {
                Some(cols) => out.push_str(&cols.join(", ")),
                None => out.push('*'),
            }
            out.push_str(" FROM ");
            out.push_str(from.name());
        }
        Head::Update { from, assignments } => {
            out.push_str("UPDATE FROM ");
            out.push_str(from.name());
            out.push_str(" SET ");
            out.push_str(&assignments.join(", "));
        }
        Head::Delete { from } => {
            out.push_str("DELETE FROM ");
            out.push_str(from.name());
        }
    }
}

/// A complete, `;`-terminated SQL statement.
///
/// Equality is by SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedStatement {
    sql: String,
}

impl RenderedStatement {
    pub(crate) fn new(sql: String) -> Self {
        Self { sql }
    }

    pub fn as_str(&self) -> &str {
        &self.sql
    }

    pub fn into_string(self) -> String {
        self.sql
    }

    /// Print the SQL to stdout.
    pub fn print_debug(&self) {
        println!("sql string: {}", self.sql);
    }
}

impl fmt::Display for RenderedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl AsRef<str> for RenderedStatement {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

impl PartialEq<str> for RenderedStatement {
    fn eq(&self, other: &str) -> bool {
        self.sql == other
    }
}

impl PartialEq<&str> for RenderedStatement {
    fn eq(&self, other: &&str) -> bool {
        self.sql == *other
    }
}

impl Serialize for RenderedStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.sql)
    }
}
