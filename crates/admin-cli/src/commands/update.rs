//! Update command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use restash_core::{DataProvider, ResourceName};

use crate::commands::create::read_body;
use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Resource name
    pub resource: String,

    /// Record identifier (digit-only ids match string or integer ids)
    pub id: String,

    /// Patch body as a JSON file path, or '-' for stdin
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: UpdateArgs, data_dir: Option<PathBuf>) -> Result<()> {
    let resource = ResourceName::new(&args.resource).context("Invalid resource name")?;
    let provider = storage::open_provider(data_dir)?;
    let id = crate::commands::resolve_id(&provider, &resource, &args.id).await?;

    let patch = read_body(&args.json)?;

    let record = provider
        .update(&resource, &id, patch)
        .await
        .context("Failed to update record")?;

    output::success(&format!("Updated {}/{}", resource, id));
    output::json(&record)?;

    Ok(())
}
