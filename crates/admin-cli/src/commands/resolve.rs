//! Resolve command implementation.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use restash_core::reference::{display_record, resolve_many};
use restash_core::ResourceName;

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Resource name to resolve against
    pub resource: String,

    /// Identifiers to resolve (blank ids are ignored; digit-only ids
    /// match string or integer ids)
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Field to display for each resolved record (default: id)
    #[arg(long)]
    pub display: Option<String>,
}

pub async fn run(args: ResolveArgs, data_dir: Option<PathBuf>) -> Result<()> {
    let resource = ResourceName::new(&args.resource).context("Invalid resource name")?;
    let provider = storage::open_provider(data_dir)?;

    // A digit-only argument may name either a string or an integer id;
    // offer both forms and let the provider drop the unknown one.
    let mut ids: Vec<Value> = Vec::new();
    for raw in &args.ids {
        ids.push(Value::String(raw.clone()));
        if let Ok(n) = raw.parse::<i64>() {
            ids.push(Value::Number(n.into()));
        }
    }

    let records = resolve_many(&provider, &resource, &ids)
        .await
        .context("Failed to resolve references")?;

    let resolved: HashSet<String> = records.iter().map(|r| r.id().to_string()).collect();
    let missing = args
        .ids
        .iter()
        .filter(|raw| !raw.is_empty() && !resolved.contains(raw.as_str()))
        .count();
    if missing > 0 {
        tracing::warn!(missing, "Some references did not resolve");
    }

    for record in &records {
        output::field(
            &record.id().to_string(),
            &display_record(record, args.display.as_deref()),
        );
    }

    Ok(())
}
