//! Subcommand implementations.

mod create;
mod delete;
mod get;
mod list;
mod resolve;
mod resources;
mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;

use restash_core::{DataProvider, RecordId, ResourceName};
use restash_local::FileProvider;

/// Resolve a command-line id argument to the record's stored identity.
///
/// A digit-only argument is ambiguous between a JSON string id and a
/// JSON integer id; the string form is tried first, then the integer
/// form.
pub(crate) async fn resolve_id(
    provider: &FileProvider,
    resource: &ResourceName,
    raw: &str,
) -> Result<RecordId> {
    let id: RecordId = raw.parse().context("Invalid record id")?;

    match provider.get_one(resource, &id).await {
        Ok(_) => Ok(id),
        Err(err) if err.is_not_found() => {
            if let Ok(n) = raw.parse::<i64>() {
                let alt = RecordId::from(n);
                if provider.get_one(resource, &alt).await.is_ok() {
                    return Ok(alt);
                }
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records in a resource
    List(list::ListArgs),

    /// Fetch a single record
    Get(get::GetArgs),

    /// Create a new record in a resource
    Create(create::CreateArgs),

    /// Patch a record (shallow merge)
    Update(update::UpdateArgs),

    /// Delete a record
    Delete(delete::DeleteArgs),

    /// Resolve references against a resource
    Resolve(resolve::ResolveArgs),

    /// List known resources
    Resources(resources::ResourcesArgs),
}

pub async fn handle(cmd: Commands, data_dir: Option<PathBuf>) -> Result<()> {
    match cmd {
        Commands::List(args) => list::run(args, data_dir).await,
        Commands::Get(args) => get::run(args, data_dir).await,
        Commands::Create(args) => create::run(args, data_dir).await,
        Commands::Update(args) => update::run(args, data_dir).await,
        Commands::Delete(args) => delete::run(args, data_dir).await,
        Commands::Resolve(args) => resolve::run(args, data_dir).await,
        Commands::Resources(args) => resources::run(args, data_dir).await,
    }
}
