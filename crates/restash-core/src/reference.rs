//! Foreign-key style reference resolution.
//!
//! References arrive as raw JSON values (a form field, a foreign-key
//! column), so they are sanitized before touching the provider: null,
//! empty-string, and non-scalar ids are dropped, and resolution
//! short-circuits without a provider call when nothing valid remains.

use serde_json::Value;

use crate::Result;
use crate::provider::DataProvider;
use crate::record::{ID_FIELD, Record};
use crate::types::{RecordId, ResourceName};

/// Marker rendered when a reference has no usable display value.
pub const UNKNOWN_DISPLAY: &str = "Unknown";

/// Resolve a single reference.
///
/// Returns `Ok(None)` without calling the provider when the raw id is
/// null, empty, or otherwise unusable. A valid id delegates to
/// [`DataProvider::get_one`], so a dangling reference surfaces as
/// [`Error::NotFound`](crate::Error::NotFound).
pub async fn resolve_one<P>(
    provider: &P,
    resource: &ResourceName,
    id: &Value,
) -> Result<Option<Record>>
where
    P: DataProvider + ?Sized,
{
    match RecordId::from_value(id) {
        Some(id) => provider.get_one(resource, &id).await.map(Some),
        None => Ok(None),
    }
}

/// Resolve a batch of references.
///
/// Invalid ids are dropped before resolution; if zero valid ids remain
/// the provider is never invoked. Resolution goes through
/// [`DataProvider::get_many`], so unknown ids are omitted rather than
/// failing the batch. Result order follows the provider's batch order,
/// not the input id order.
pub async fn resolve_many<P>(
    provider: &P,
    resource: &ResourceName,
    ids: &[Value],
) -> Result<Vec<Record>>
where
    P: DataProvider + ?Sized,
{
    let valid: Vec<RecordId> = ids.iter().filter_map(RecordId::from_value).collect();

    if valid.is_empty() {
        return Ok(Vec::new());
    }

    provider.get_many(resource, &valid).await
}

/// Extract the display value for a resolved reference.
///
/// Three-level fallback, in order: the caller-specified source field,
/// the record's `id` field, the constant [`UNKNOWN_DISPLAY`]. The
/// fallback chain is a deliberate UX contract; null fields count as
/// absent.
pub fn display_value(value: &Value, source: Option<&str>) -> String {
    let field = |key: &str| match value.get(key) {
        Some(Value::Null) | None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    source
        .and_then(&field)
        .or_else(|| field(ID_FIELD))
        .unwrap_or_else(|| UNKNOWN_DISPLAY.to_string())
}

/// [`display_value`] for a validated record.
pub fn display_record(record: &Record, source: Option<&str>) -> String {
    display_value(record.as_value(), source)
}
