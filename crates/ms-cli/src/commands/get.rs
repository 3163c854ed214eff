//! Read a stored value.

use crate::cli::{GetArgs, GlobalArgs};
use crate::context::open_store;
use anyhow::{Context, Result};
use serde_json::Value;

/// Execute the get command.
pub async fn execute(args: &GetArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global).await?;
    let t = &args.target;

    if !args.json {
        let value = store
            .get(&t.object_type, &t.object_id, &t.key, &args.default)
            .await
            .context("Failed to read value")?;
        println!("{value}");
        return Ok(());
    }

    let default = if args.default.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&args.default).context("--default is not valid JSON")?
    };
    let value = store
        .get_json(&t.object_type, &t.object_id, &t.key, default)
        .await
        .context("Failed to read value")?
        .into_result()
        .with_context(|| {
            format!(
                "Stored value for {}/{}/{} is not valid JSON",
                t.object_type, t.object_id, t.key
            )
        })?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
