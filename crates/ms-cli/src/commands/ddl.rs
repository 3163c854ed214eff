//! Print the meta table DDL without touching a database.

use crate::cli::GlobalArgs;
use crate::context::resolve_config;
use anyhow::{Context, Result};

/// Execute the ddl command.
///
/// `--dialect` is taken as a driver name; without it the configured or
/// database-implied dialect is used. The DDL is parsed back before printing.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global)?;
    let driver = global
        .dialect
        .clone()
        .unwrap_or_else(|| config.effective_dialect().name().to_string());

    let sql = ms_sql::create_table_sql_for_driver(&driver, &config.table_name)
        .with_context(|| format!("Failed to generate DDL for driver '{driver}'"))?;
    ms_sql::validate_sql(config.effective_dialect(), &sql)
        .context("Generated DDL does not parse")?;

    log::debug!("Generated DDL for table '{}' ({driver})", config.table_name);
    println!("{sql};");
    Ok(())
}
