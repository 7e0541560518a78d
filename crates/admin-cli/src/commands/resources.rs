//! Resources command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::storage;

#[derive(Args, Debug)]
pub struct ResourcesArgs {}

pub async fn run(_args: ResourcesArgs, data_dir: Option<PathBuf>) -> Result<()> {
    let provider = storage::open_provider(data_dir)?;

    let names = provider
        .list_resources()
        .context("Failed to list resources")?;

    if names.is_empty() {
        eprintln!("{}", "No resources found.".dimmed());
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
