//! Configuration types and parsing for metastore.yml

use crate::dialect::Dialect;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Config file names searched by [`Config::load_from_dir`], in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["metastore.yml", "metastore.yaml"];

const DEFAULT_DB_PATH: &str = ":memory:";

/// Store configuration from metastore.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the meta table
    pub table_name: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// SQL dialect; detected from the database type when omitted
    #[serde(default)]
    pub dialect: Option<Dialect>,

    /// Create the meta table on open if it is missing
    #[serde(default)]
    pub automigrate: bool,

    /// Log every generated statement at debug level
    #[serde(default)]
    pub debug: bool,

    /// How `set` writes a value
    #[serde(default)]
    pub write_mode: WriteMode,
}

/// Database type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// DuckDB (default)
    #[default]
    DuckDb,
    /// SQLite
    Sqlite,
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbType::DuckDb => write!(f, "duckdb"),
            DbType::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database type (duckdb or sqlite)
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database file path, or `:memory:`
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

/// Strategy `set` uses to write a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Single native insert-or-update keyed by the
    /// `(object_type, object_id, meta_key)` unique constraint.
    ///
    /// Requires a table created by this crate's DDL. Without the constraint,
    /// `ON CONFLICT` dialects reject the statement, but MySQL's
    /// `ON DUPLICATE KEY UPDATE` only sees the primary key, which a fresh id
    /// never hits: every `set` inserts another row for the triple. Use
    /// [`WriteMode::FindThenWrite`] for tables without the constraint.
    #[default]
    Upsert,
    /// Look the row up, then insert or update it.
    ///
    /// Works against tables created without the unique constraint, but two
    /// concurrent writers of the same triple can both miss the lookup and
    /// insert duplicate rows, or overwrite each other's update.
    FindThenWrite,
}

impl Config {
    /// Minimal configuration for `table_name` with every other field defaulted
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            database: DatabaseConfig::default(),
            dialect: None,
            automigrate: false,
            debug: false,
            write_mode: WriteMode::default(),
        }
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Load configuration from a directory.
    /// Looks for metastore.yml or metastore.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map(|path| Self::load(&path))
            .unwrap_or_else(|| {
                Err(CoreError::ConfigNotFound {
                    path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
                })
            })
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> CoreResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Dialect to render SQL for: the configured one, else the one the
    /// database type speaks
    pub fn effective_dialect(&self) -> Dialect {
        self.dialect.unwrap_or(match self.database.db_type {
            DbType::DuckDb => Dialect::DuckDb,
            DbType::Sqlite => Dialect::Sqlite,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.table_name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "table_name cannot be empty".to_string(),
            });
        }

        if self.table_name.contains('\0') {
            return Err(CoreError::ConfigInvalid {
                message: "table_name cannot contain NUL characters".to_string(),
            });
        }

        if self.database.path.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty (use ':memory:' for in-memory)"
                    .to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
