//! List-query types and the pure query engine.
//!
//! A [`Query`] is always fully specified; partial caller input arrives as
//! [`QueryParams`] and is normalized with defaults. The engine itself is
//! pure: [`apply`] runs search, filter, sort, and pagination over an
//! in-memory collection and never touches storage.

mod paginate;
mod predicate;
mod sort;

pub use paginate::{ListResult, paginate};
pub use predicate::{matches_filter, matches_search};
pub use sort::{compare_values, sort_records};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};
use crate::record::{ID_FIELD, Record};
use crate::types::RecordId;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(InvalidInputError::Other {
                message: format!("invalid sort order '{}': expected 'asc' or 'desc'", s),
            }
            .into()),
        }
    }
}

/// 1-indexed page window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page number, 1-indexed.
    pub page: u32,
    /// Records per page; always positive.
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Sort key: a field name and a direction.
///
/// An empty field name means "do not sort"; input order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// The record field to sort by.
    pub field: String,
    /// The direction to sort in.
    pub order: SortOrder,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: ID_FIELD.to_string(),
            order: SortOrder::Asc,
        }
    }
}

/// Partial query input, as supplied by callers.
///
/// Every field is optional; [`QueryParams::normalize`] fills in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    /// Page number, 1-indexed.
    pub page: Option<u32>,
    /// Records per page.
    pub per_page: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort direction.
    pub order: Option<SortOrder>,
    /// Field → expected value filter, ANDed across entries.
    pub filter: Option<Map<String, Value>>,
    /// Free-text search term.
    pub search: Option<String>,
}

impl QueryParams {
    /// Normalize into a fully-specified [`Query`].
    ///
    /// Defaults: `page=1`, `per_page=10`, sort by `id` ascending, empty
    /// filter, no search. Zero page or page size clamps to 1 rather than
    /// erroring; normalization is infallible.
    pub fn normalize(self) -> Query {
        Query {
            pagination: Pagination {
                page: self.page.unwrap_or(DEFAULT_PAGE).max(1),
                per_page: self.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1),
            },
            sort: Sort {
                field: self.sort.unwrap_or_else(|| ID_FIELD.to_string()),
                order: self.order.unwrap_or_default(),
            },
            filter: self.filter.unwrap_or_default(),
            search: self.search.filter(|s| !s.is_empty()),
        }
    }
}

/// A fully-specified list query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Page window.
    pub pagination: Pagination,
    /// Sort key.
    pub sort: Sort,
    /// Field → expected value filter, ANDed across entries.
    pub filter: Map<String, Value>,
    /// Free-text search term, matched against every field.
    pub search: Option<String>,
}

impl From<QueryParams> for Query {
    fn from(params: QueryParams) -> Self {
        params.normalize()
    }
}

/// Run the full query pipeline over a collection.
///
/// Order of operations: search, then filter, then sort, then paginate.
/// `total` in the result reflects the filtered collection before slicing.
pub fn apply(records: Vec<Record>, query: &Query) -> ListResult {
    let mut matched: Vec<Record> = records
        .into_iter()
        .filter(|r| {
            query
                .search
                .as_deref()
                .is_none_or(|term| matches_search(r, term))
                && matches_filter(r, &query.filter)
        })
        .collect();

    sort_records(&mut matched, &query.sort);

    paginate(matched, &query.pagination)
}

/// Run the query pipeline over records referencing `id` through `target`.
///
/// The target filter is coerced equality on the `target` field (see
/// [`RecordId::matches`]), never substring matching; the remaining query
/// then applies as in [`apply`].
pub fn apply_reference(
    records: Vec<Record>,
    target: &str,
    id: &RecordId,
    query: &Query,
) -> ListResult {
    let referencing: Vec<Record> = records
        .into_iter()
        .filter(|r| r.get(target).is_some_and(|v| id.matches(v)))
        .collect();

    apply(referencing, query)
}
