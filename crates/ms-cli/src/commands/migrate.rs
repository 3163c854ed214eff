//! Create the meta table on the configured database.

use crate::cli::GlobalArgs;
use crate::context::{open_database, resolve_config, store_options};
use anyhow::{Context, Result};
use ms_store::MetaStore;
use std::sync::Arc;

/// Execute the migrate command.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global)?;
    let db = open_database(&config)?;

    let existed = db
        .relation_exists(&config.table_name)
        .await
        .context("Failed to check for the meta table")?;

    // Migrate explicitly below so the report reflects this run.
    let store = MetaStore::new(store_options(&config, Arc::clone(&db)).with_automigrate(false))
        .await
        .context("Failed to initialize meta store")?;
    store
        .auto_migrate()
        .await
        .context("Failed to create the meta table")?;

    if existed {
        println!("Table '{}' already exists", store.table_name());
    } else {
        println!("Created table '{}' ({})", store.table_name(), store.dialect());
    }
    Ok(())
}
