//! Store a value.

use crate::cli::{GlobalArgs, SetArgs};
use crate::context::open_store;
use anyhow::{Context, Result};
use serde_json::Value;

/// Execute the set command.
pub async fn execute(args: &SetArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global).await?;
    let t = &args.target;

    let stored = if args.json {
        let value: Value = serde_json::from_str(&args.value).context("Value is not valid JSON")?;
        store
            .set_json(&t.object_type, &t.object_id, &t.key, &value)
            .await
    } else {
        store
            .set(&t.object_type, &t.object_id, &t.key, &args.value)
            .await
    };
    stored.context("Failed to store value")?;

    log::info!("Stored {}/{}/{}", t.object_type, t.object_id, t.key);
    Ok(())
}
