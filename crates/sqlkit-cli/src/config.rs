use serde::Deserialize;
use sqlkit::{Clause, Head, Limit, OrderBy, SortDir, StatementKind, TableRef, Where};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const SUPPORTED_VERSION: &str = "1";

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config_path: PathBuf,
    pub file: ConfigFile,
}

impl ProjectConfig {
    pub fn load(config_path: PathBuf) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!(
                "failed to read config file {}: {e}",
                config_path.display()
            )
        })?;

        let file = ConfigFile::parse(&raw).map_err(|e| {
            anyhow::anyhow!(
                "failed to load config file {}: {e:#}",
                config_path.display()
            )
        })?;

        Ok(Self { config_path, file })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub version: String,

    #[serde(default)]
    pub statements: Vec<StatementConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatementConfig {
    pub name: String,
    pub kind: StatementKind,
    pub table: String,

    /// SELECT only; absent renders `*`.
    pub columns: Option<Vec<String>>,

    /// UPDATE only.
    #[serde(default)]
    pub set: Vec<String>,

    #[serde(default, rename = "where")]
    pub wheres: Vec<String>,

    #[serde(default)]
    pub order_by: Vec<OrderByConfig>,

    #[serde(default)]
    pub limit: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderByConfig {
    pub column: String,
    #[serde(default)]
    pub direction: SortDir,
}

impl ConfigFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version != SUPPORTED_VERSION {
            anyhow::bail!(
                "unsupported config version {:?} (expected {SUPPORTED_VERSION:?})",
                self.version
            );
        }

        let mut seen = BTreeSet::new();
        for stmt in &self.statements {
            if !seen.insert(stmt.name.as_str()) {
                anyhow::bail!("duplicate statement name: {}", stmt.name);
            }
            stmt.validate()?;
        }
        Ok(())
    }
}

impl StatementConfig {
    fn validate(&self) -> anyhow::Result<()> {
        let name = &self.name;
        if name.trim().is_empty() {
            anyhow::bail!("statement name must not be empty");
        }
        if self.table.trim().is_empty() {
            anyhow::bail!("statements.{name}: table must not be empty");
        }
        if self.columns.is_some() && self.kind != StatementKind::Select {
            anyhow::bail!("statements.{name}: columns is only valid for select");
        }
        if self.columns.as_ref().is_some_and(|c| c.is_empty()) {
            anyhow::bail!("statements.{name}: columns must not be empty (omit it for *)");
        }
        match self.kind {
            StatementKind::Update if self.set.is_empty() => {
                anyhow::bail!("statements.{name}: update requires at least one set entry");
            }
            StatementKind::Select | StatementKind::Delete if !self.set.is_empty() => {
                anyhow::bail!("statements.{name}: set is only valid for update");
            }
            _ => {}
        }
        Ok(())
    }

    pub fn head<'t>(&self, table: &'t dyn TableRef) -> Head<'t> {
        match self.kind {
            StatementKind::Select => match &self.columns {
                Some(cols) => Head::select_columns(cols.iter().cloned(), table),
                None => Head::select(table),
            },
            StatementKind::Update => Head::update(table, self.set.iter().cloned()),
            StatementKind::Delete => Head::delete(table),
        }
    }

    /// Clauses in canonical order: WHERE, ORDER BY, LIMIT.
    pub fn clauses(&self) -> anyhow::Result<Vec<Clause>> {
        let mut out =
            Vec::with_capacity(self.wheres.len() + self.order_by.len() + self.limit.len());
        out.extend(self.wheres.iter().map(|w| Clause::from(Where::new(w.as_str()))));
        out.extend(
            self.order_by
                .iter()
                .map(|o| Clause::from(OrderBy::with_dir(o.column.as_str(), o.direction))),
        );
        for &n in &self.limit {
            let limit = Limit::new(n)
                .map_err(|e| anyhow::anyhow!("statements.{}: {e}", self.name))?;
            out.push(limit.into());
        }
        Ok(out)
    }
}
