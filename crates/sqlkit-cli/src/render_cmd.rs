use crate::cli::RenderArgs;
use crate::config::{ConfigFile, ProjectConfig, StatementConfig};
use serde::Serialize;
use sqlkit::{RenderedStatement, Table};
use std::io::Write;

#[derive(Debug, Serialize)]
struct RenderedLine<'a> {
    name: &'a str,
    sql: &'a RenderedStatement,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    if args.verbose {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .try_init();
    }

    let project = ProjectConfig::load(args.config.clone())?;
    if args.verbose {
        eprintln!(
            "config: {} ({} statements)",
            project.path().display(),
            project.file.statements.len()
        );
    }

    let rendered = render_selected(&project.file, &args.names)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (name, sql) in &rendered {
        if args.json {
            serde_json::to_writer(&mut out, &RenderedLine { name, sql })?;
            writeln!(out)?;
        } else {
            writeln!(out, "{sql}")?;
        }
    }
    Ok(())
}

/// Build the selected statements in config order; all or nothing.
fn render_selected<'a>(
    file: &'a ConfigFile,
    names: &[String],
) -> anyhow::Result<Vec<(&'a str, RenderedStatement)>> {
    for name in names {
        if !file.statements.iter().any(|s| &s.name == name) {
            anyhow::bail!("no statement named {name:?} in config");
        }
    }

    file.statements
        .iter()
        .filter(|s| names.is_empty() || names.contains(&s.name))
        .map(|s| render_one(s).map(|sql| (s.name.as_str(), sql)))
        .collect()
}

fn render_one(stmt: &StatementConfig) -> anyhow::Result<RenderedStatement> {
    let table = Table::owned(stmt.table.as_str());
    let clauses = stmt.clauses()?;
    sqlkit::build(stmt.head(&table), clauses)
        .map_err(|e| anyhow::anyhow!("statements.{}: {e}", stmt.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version = "1"

[[statements]]
name = "all_photos"
kind = "select"
table = "photos"

[[statements]]
name = "purge"
kind = "delete"
table = "photos"
where = ["id = 1", "is_deleted = 1"]
"#;

    #[test]
    fn renders_all_in_order() {
        let file = ConfigFile::parse(SAMPLE).unwrap();
        let out = render_selected(&file, &[]).unwrap();
        let sqls: Vec<_> = out.iter().map(|(n, s)| (*n, s.as_str())).collect();
        assert_eq!(
            sqls,
            vec![
                ("all_photos", "SELECT * FROM photos;"),
                ("purge", "DELETE FROM photos WHERE id = 1 AND is_deleted = 1;"),
            ]
        );
    }

    #[test]
    fn renders_selected_only() {
        let file = ConfigFile::parse(SAMPLE).unwrap();
        let out = render_selected(&file, &["purge".to_string()]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0, "purge");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let file = ConfigFile::parse(SAMPLE).unwrap();
        let err = render_selected(&file, &["nope".to_string()]).unwrap_err();
        assert!(err.to_string().contains("no statement named"));
    }

    #[test]
    fn illegal_clause_names_the_statement() {
        let raw = r#"
version = "1"

[[statements]]
name = "bad"
kind = "update"
table = "photos"
set = ["a = 1"]
limit = [1]
"#;
        let file = ConfigFile::parse(raw).unwrap();
        let err = render_selected(&file, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "statements.bad: LIMIT clause is not permitted in UPDATE statements"
        );
    }

    #[test]
    fn json_line_shape() {
        let file = ConfigFile::parse(SAMPLE).unwrap();
        let out = render_selected(&file, &["all_photos".to_string()]).unwrap();
        let (name, sql) = &out[0];
        let line = serde_json::to_string(&RenderedLine { name, sql }).unwrap();
        assert_eq!(line, r#"{"name":"all_photos","sql":"SELECT * FROM photos;"}"#);
    }
}
