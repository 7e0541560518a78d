//! Create command implementation.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use restash_core::{DataProvider, ResourceName};

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Resource name
    pub resource: String,

    /// Record body as a JSON file path, or '-' for stdin
    #[arg(long)]
    pub json: String,

    /// Explicit record id (default: server-assigned UUID)
    #[arg(long)]
    pub id: Option<String>,
}

/// Read a JSON body from a file path or stdin.
pub(crate) fn read_body(source: &str) -> Result<Value> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read '{}'", source))?
    };

    serde_json::from_str(&content).context("Invalid JSON body")
}

pub async fn run(args: CreateArgs, data_dir: Option<PathBuf>) -> Result<()> {
    let resource = ResourceName::new(&args.resource).context("Invalid resource name")?;
    let provider = storage::open_provider(data_dir)?;

    let mut data = read_body(&args.json)?;

    if let Some(id) = &args.id {
        let obj = data
            .as_object_mut()
            .context("Record body must be a JSON object")?;
        obj.insert("id".to_string(), Value::String(id.clone()));
    }

    let record = provider
        .create(&resource, data)
        .await
        .context("Failed to create record")?;

    output::success(&format!("Created {}/{}", resource, record.id()));
    output::json(&record)?;

    Ok(())
}
