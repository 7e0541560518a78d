//! Delete command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use restash_core::{DataProvider, ResourceName};

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Resource name
    pub resource: String,

    /// Record identifier (digit-only ids match string or integer ids)
    pub id: String,
}

pub async fn run(args: DeleteArgs, data_dir: Option<PathBuf>) -> Result<()> {
    let resource = ResourceName::new(&args.resource).context("Invalid resource name")?;
    let provider = storage::open_provider(data_dir)?;
    let id = crate::commands::resolve_id(&provider, &resource, &args.id).await?;

    provider
        .delete(&resource, &id)
        .await
        .context("Failed to delete record")?;

    output::success(&format!("Deleted {}/{}", resource, id));

    Ok(())
}
