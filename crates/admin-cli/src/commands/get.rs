//! Get command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use restash_core::{DataProvider, ResourceName};

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resource name
    pub resource: String,

    /// Record identifier (digit-only ids match string or integer ids)
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: GetArgs, data_dir: Option<PathBuf>) -> Result<()> {
    let resource = ResourceName::new(&args.resource).context("Invalid resource name")?;
    let provider = storage::open_provider(data_dir)?;
    let id = crate::commands::resolve_id(&provider, &resource, &args.id).await?;

    let record = provider
        .get_one(&resource, &id)
        .await
        .context("Failed to fetch record")?;

    if args.pretty {
        output::json_pretty(&record)?;
    } else {
        output::json(&record)?;
    }

    Ok(())
}
