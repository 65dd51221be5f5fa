//! Example demonstrating the three build surfaces against a `photos` table.
//!
//! Run with:
//!   cargo run --example photos -p sqlkit

use sqlkit::prelude::*;
use sqlkit::build;

struct Photo;

impl StaticTable for Photo {
    const NAME: &'static str = "photos";
}

fn main() -> BuildResult<()> {
    // SELECT * FROM photos;
    query![Head::select(&Photo)]?.print_debug();

    // SELECT title FROM photos WHERE id = 1 ORDER BY id DESC LIMIT 5;
    query![
        Head::select_columns(["title"], &Photo),
        Where::new("id = 1"),
        OrderBy::with_dir("id", SortDir::Desc),
        Limit::new(5)?,
    ]?
    .print_debug();

    // UPDATE FROM photos SET is_deleted = 1 WHERE id = 1;
    Query::new(Head::update(&Photo, ["is_deleted = 1"]))
        .filter("id = 1")
        .build()?
        .print_debug();

    // DELETE FROM photos WHERE id = 1;
    build(Head::delete(&Photo), vec![Where::new("id = 1").into()])?.print_debug();

    // ORDER BY after UPDATE is rejected, not dropped.
    let runtime = Table::owned("photos");
    match query![Head::update(&runtime, ["is_deleted = 1"]), OrderBy::new("id")] {
        Ok(sql) => println!("unexpected: {sql}"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
