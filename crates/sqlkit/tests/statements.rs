//! End-to-end statement building through the public API.

use sqlkit::prelude::*;
use sqlkit::{Clause, ClauseKind, Part, StatementKind, assemble, build, render, validate};
use std::thread;

struct Photo;

impl StaticTable for Photo {
    const NAME: &'static str = "photos";
}

static PHOTOS: Table = Table::new("photos");

// ── Scenarios ──────────────────────────────────────────────────────────────

#[test]
fn scenario_select_star() {
    let sql = query![Head::select(&Photo)].unwrap();
    assert_eq!(sql, "SELECT * FROM photos;");
}

#[test]
fn scenario_select_with_all_clauses() {
    let sql = query![
        Head::select_columns(["title"], &Photo),
        Where::new("id = 1"),
        OrderBy::with_dir("id", SortDir::Desc),
        Limit::new(5).unwrap(),
    ]
    .unwrap();
    assert_eq!(
        sql.as_str(),
        "SELECT title FROM photos WHERE id = 1 ORDER BY id DESC LIMIT 5;"
    );
}

#[test]
fn scenario_update() {
    let sql = query![Head::update(&Photo, ["is_deleted = 1"]), Where::new("id = 1")].unwrap();
    assert_eq!(sql, "UPDATE FROM photos SET is_deleted = 1 WHERE id = 1;");
}

#[test]
fn scenario_delete() {
    let sql = query![Head::delete(&Photo), Where::new("id = 1")].unwrap();
    assert_eq!(sql, "DELETE FROM photos WHERE id = 1;");
}

#[test]
fn scenario_update_with_order_by_is_rejected() {
    let err = query![Head::update(&Photo, ["is_deleted = 1"]), OrderBy::new("id")].unwrap_err();
    assert_eq!(
        err,
        BuildError::IllegalClause {
            offending_kind: ClauseKind::OrderBy,
            head_kind: StatementKind::Update,
        }
    );
}

// ── Properties ─────────────────────────────────────────────────────────────

#[test]
fn empty_clause_list_renders_head_and_terminator() {
    let cases = [
        (Head::select(&PHOTOS), "SELECT * FROM photos;"),
        (
            Head::select_columns(["id", "title"], &PHOTOS),
            "SELECT id, title FROM photos;",
        ),
        (
            Head::update(&PHOTOS, ["a = 1", "b = 2"]),
            "UPDATE FROM photos SET a = 1, b = 2;",
        ),
        (Head::delete(&PHOTOS), "DELETE FROM photos;"),
    ];
    for (head, expected) in cases {
        let set = validate(&head, Vec::new()).unwrap();
        assert_eq!(render(&head, &set), expected);
    }
}

#[test]
fn where_predicates_keep_order_for_every_head() {
    let preds = ["a = 1", "b = 2", "c = 3"];
    for head in [
        Head::select(&PHOTOS),
        Head::update(&PHOTOS, ["x = 0"]),
        Head::delete(&PHOTOS),
    ] {
        let clauses = preds.iter().map(|p| Clause::from(Where::new(*p)));
        let sql = build(head, clauses).unwrap();
        assert!(
            sql.as_str().ends_with(" WHERE a = 1 AND b = 2 AND c = 3;"),
            "unexpected: {sql}"
        );
    }
}

#[test]
fn order_and_limit_rejected_after_update_and_delete() {
    for head in [Head::update(&PHOTOS, ["x = 0"]), Head::delete(&PHOTOS)] {
        let kind = head.kind();

        let err = build(head.clone(), vec![OrderBy::desc("id").into()]).unwrap_err();
        assert_eq!(err, BuildError::illegal_clause(ClauseKind::OrderBy, kind));

        let err = build(head, vec![Limit::new(3).unwrap().into()]).unwrap_err();
        assert_eq!(err, BuildError::illegal_clause(ClauseKind::Limit, kind));
    }
}

#[test]
fn non_positive_limit_never_reaches_validation() {
    assert_eq!(Limit::new(0).unwrap_err(), BuildError::InvalidLimit(0));
    assert_eq!(Limit::new(-5).unwrap_err(), BuildError::InvalidLimit(-5));
}

#[test]
fn assemble_counts_heads() {
    let err = assemble(vec![
        Part::from(Head::delete(&PHOTOS)),
        Part::from(Head::delete(&PHOTOS)),
        Part::from(Head::delete(&PHOTOS)),
    ])
    .unwrap_err();
    assert_eq!(err, BuildError::MissingOrDuplicateHead { count: 3 });
}

// ── Threads ────────────────────────────────────────────────────────────────

#[test]
fn builds_run_independently_across_threads() {
    let handles: Vec<_> = (1..=8_i64)
        .map(|n| {
            thread::spawn(move || {
                Query::new(Head::select(&PHOTOS))
                    .filter(format!("id = {n}"))
                    .limit(n)
                    .and_then(Query::build)
                    .map(|s| s.into_string())
            })
        })
        .collect();

    for (n, handle) in (1..=8_i64).zip(handles) {
        let sql = handle.join().unwrap().unwrap();
        assert_eq!(sql, format!("SELECT * FROM photos WHERE id = {n} LIMIT {n};"));
    }
}

#[test]
fn shared_head_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Head<'static>>();
    assert_send_sync::<sqlkit::ClauseSet>();
    assert_send_sync::<sqlkit::RenderedStatement>();
}
