//! Show the full entry stored for a key.

use crate::cli::{FindArgs, FindOutput, GlobalArgs};
use crate::context::open_store;
use anyhow::{Context, Result};
use ms_core::value::TIMESTAMP_FORMAT;
use ms_core::MetaEntry;

/// Execute the find command.
pub async fn execute(args: &FindArgs, global: &GlobalArgs) -> Result<()> {
    let store = open_store(global).await?;
    let t = &args.target;

    let Some(entry) = store
        .find_by_key(&t.object_type, &t.object_id, &t.key)
        .await
        .context("Failed to look up entry")?
    else {
        anyhow::bail!("No entry for {}/{}/{}", t.object_type, t.object_id, t.key);
    };

    match args.output {
        FindOutput::Text => print_text(&entry),
        FindOutput::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
    }
    Ok(())
}

fn print_text(entry: &MetaEntry) {
    println!("id:          {}", entry.id);
    println!("object_type: {}", entry.object_type);
    println!("object_id:   {}", entry.object_id);
    println!("key:         {}", entry.key);
    println!("value:       {}", entry.value);
    println!("created_at:  {}", entry.created_at.format(TIMESTAMP_FORMAT));
    println!("updated_at:  {}", entry.updated_at.format(TIMESTAMP_FORMAT));
}
