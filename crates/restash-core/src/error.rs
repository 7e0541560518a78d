//! Error types for the restash libraries.
//!
//! This module provides a unified error type with explicit variants for
//! lookup failures, storage failures, and input validation errors.

use thiserror::Error;

/// The unified error type for restash operations.
///
/// This error type covers all failure modes of the data-access layer,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// The addressed resource/id combination does not exist.
    #[error("record '{id}' not found in resource '{resource}'")]
    NotFound {
        /// The resource that was addressed.
        resource: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// No data provider has been configured for the caller.
    ///
    /// Kept distinct from [`Error::NotFound`] so that "nothing to talk to"
    /// is never mistaken for "the record is gone".
    #[error("no data provider configured")]
    ProviderUnavailable,

    /// Input validation errors (invalid resource name, id, record shape).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Storage backend errors (IO, serialization, locking).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Any failure that is not one of the above kinds.
    ///
    /// Arbitrary errors are normalized into this variant rather than
    /// propagated as-is, so callers can rely on a consistent error shape.
    #[error("unknown error: {message}")]
    Unknown {
        /// Human-readable description of the underlying failure.
        message: String,
    },
}

impl Error {
    /// Create a [`Error::NotFound`] for the given resource and id.
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        Error::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// Normalize an arbitrary failure into [`Error::Unknown`].
    pub fn unknown(err: impl std::fmt::Display) -> Self {
        Error::Unknown {
            message: err.to_string(),
        }
    }

    /// Returns true if this error is a [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid resource name format.
    #[error("invalid resource name '{value}': {reason}")]
    ResourceName { value: String, reason: String },

    /// Invalid record identifier.
    #[error("invalid record id: {reason}")]
    RecordId { reason: String },

    /// Invalid record shape.
    #[error("invalid record: {reason}")]
    Record { reason: String },

    /// A record with the given id already exists.
    #[error("duplicate id '{id}' in resource '{resource}'")]
    DuplicateId { resource: String, id: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem or IO failure.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A collection could not be encoded or decoded.
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// The collection lock could not be acquired or released.
    #[error("lock error: {message}")]
    Lock { message: String },
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(StorageError::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct_from_provider_unavailable() {
        let err = Error::not_found("users", "42");
        assert!(err.is_not_found());
        assert!(!Error::ProviderUnavailable.is_not_found());
    }

    #[test]
    fn unknown_normalizes_display() {
        let err = Error::unknown("boom");
        assert_eq!(err.to_string(), "unknown error: boom");
    }
}
