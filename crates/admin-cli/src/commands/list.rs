//! List command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::{Map, Value};

use restash_core::query::QueryParams;
use restash_core::{DataProvider, ResourceName, SortOrder};

use crate::output;
use crate::storage;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource name
    pub resource: String,

    /// Page number (1-indexed)
    #[arg(long)]
    pub page: Option<u32>,

    /// Records per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Field to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc or desc)
    #[arg(long)]
    pub order: Option<String>,

    /// Filter entries as field=value (repeatable; value parsed as JSON
    /// when possible, else taken as a string)
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Free-text search term
    #[arg(long)]
    pub search: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Parse repeated `field=value` pairs into a filter map.
pub(crate) fn parse_filters(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut filter = Map::new();

    for pair in pairs {
        let (field, raw) = pair
            .split_once('=')
            .with_context(|| format!("invalid filter '{}': expected field=value", pair))?;

        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        filter.insert(field.to_string(), value);
    }

    Ok(filter)
}

pub async fn run(args: ListArgs, data_dir: Option<PathBuf>) -> Result<()> {
    let resource = ResourceName::new(&args.resource).context("Invalid resource name")?;
    let provider = storage::open_provider(data_dir)?;

    let order = args
        .order
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()
        .context("Invalid sort order")?;

    let query = QueryParams {
        page: args.page,
        per_page: args.per_page,
        sort: args.sort,
        order,
        filter: Some(parse_filters(&args.filters)?),
        search: args.search,
    }
    .normalize();

    let result = provider
        .get_list(&resource, &query)
        .await
        .context("Failed to list records")?;

    if result.data.is_empty() {
        eprintln!("{}", "No records found.".dimmed());
    }

    for record in &result.data {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
    }

    eprintln!(
        "{}",
        format!(
            "page {} of {} (total {})",
            result.page, result.total_pages, result.total
        )
        .dimmed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_json_and_string_values() {
        let filter = parse_filters(&[
            "age=30".to_string(),
            "role=admin".to_string(),
            "active=true".to_string(),
        ])
        .unwrap();

        assert_eq!(filter["age"], json!(30));
        assert_eq!(filter["role"], json!("admin"));
        assert_eq!(filter["active"], json!(true));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_filters(&["justafield".to_string()]).is_err());
    }
}
