//! Runtime context for CLI commands

use anyhow::{Context, Result};
use ms_core::{Config, DbType, Dialect};
use ms_db::{Database, DuckDbBackend};
use ms_store::{MetaStore, StoreOptions};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Resolve the effective configuration from the config file and global flags.
///
/// A missing config file is only an error when `--table` is not given either.
pub fn resolve_config(args: &GlobalArgs) -> Result<Config> {
    let config_path = Path::new(&args.config);

    let mut config = match &args.table {
        Some(table) if !config_path.exists() => Config::new(table.clone()),
        _ => Config::load(config_path)
            .with_context(|| format!("Failed to load configuration from {}", args.config))?,
    };

    if let Some(table) = &args.table {
        config.table_name = table.clone();
    }
    if let Some(path) = &args.database {
        config.database.path = path.clone();
    }
    if let Some(db_type) = args.db_type {
        config.database.db_type = db_type.into();
    }
    if let Some(dialect) = &args.dialect {
        let dialect: Dialect = dialect.parse().context("Invalid --dialect")?;
        config.dialect = Some(dialect);
    }
    if args.verbose {
        config.debug = true;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Open the database connection the configuration names
pub fn open_database(config: &Config) -> Result<Arc<dyn Database>> {
    let path = &config.database.path;
    let db: Arc<dyn Database> = match config.database.db_type {
        DbType::DuckDb => Arc::new(
            DuckDbBackend::new(path)
                .with_context(|| format!("Failed to open DuckDB database at {path}"))?,
        ),
        #[cfg(feature = "sqlite")]
        DbType::Sqlite => Arc::new(
            ms_db::SqliteBackend::new(path)
                .with_context(|| format!("Failed to open SQLite database at {path}"))?,
        ),
        #[cfg(not(feature = "sqlite"))]
        DbType::Sqlite => anyhow::bail!("SQLite support is not compiled in (enable the `sqlite` feature)"),
    };
    Ok(db)
}

/// Build the store options for a resolved configuration and open connection
pub fn store_options(config: &Config, db: Arc<dyn Database>) -> StoreOptions {
    let mut options = StoreOptions::new(config.table_name.clone())
        .with_db(db)
        .with_automigrate(config.automigrate)
        .with_debug(config.debug)
        .with_write_mode(config.write_mode);
    if let Some(dialect) = config.dialect {
        options = options.with_dialect(dialect);
    }
    options
}

/// Resolve configuration, connect, and construct the store
pub async fn open_store(args: &GlobalArgs) -> Result<MetaStore> {
    let config = resolve_config(args)?;
    let db = open_database(&config)?;
    MetaStore::new(store_options(&config, db))
        .await
        .context("Failed to initialize meta store")
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
