//! restash-core - Resource data-access contract and query engine.
//!
//! This crate defines the [`DataProvider`] contract (CRUD plus list
//! queries over named collections of schema-agnostic JSON records), the
//! pure query engine behind it (normalize, search, filter, sort,
//! paginate), and reference resolution between resources. Storage
//! backends live in companion crates.
//!
//! # Example
//!
//! ```
//! use restash_core::query::{QueryParams, apply};
//! use restash_core::Record;
//! use serde_json::json;
//!
//! let records = vec![
//!     Record::new(json!({"id": 1, "name": "Alice"})).unwrap(),
//!     Record::new(json!({"id": 2, "name": "Bob"})).unwrap(),
//! ];
//!
//! let query = QueryParams {
//!     search: Some("ali".to_string()),
//!     ..Default::default()
//! }
//! .normalize();
//!
//! let page = apply(records, &query);
//! assert_eq!(page.total, 1);
//! ```

pub mod error;
pub mod provider;
pub mod query;
pub mod record;
pub mod reference;
pub mod types;

// Re-export primary types at crate root for convenience
pub use error::Error;
pub use provider::DataProvider;
pub use query::{ListResult, Query, QueryParams, SortOrder};
pub use record::Record;
pub use types::{RecordId, ResourceName};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
