//! Remove a stored entry.

use crate::cli::{GlobalArgs, KeyArgs};
use crate::context::open_store;
use anyhow::{Context, Result};

/// Execute the rm command. Removing an absent entry is not an error.
pub async fn execute(args: &KeyArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global).await?;
    store
        .remove(&args.object_type, &args.object_id, &args.key)
        .await
        .context("Failed to remove entry")?;

    log::info!("Removed {}/{}/{}", args.object_type, args.object_id, args.key);
    Ok(())
}
