//! Record identifier type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A record identifier.
///
/// Identifiers are either strings or integers; identity is by value
/// equality of the id, not of the whole record.
///
/// # Example
///
/// ```
/// use restash_core::RecordId;
/// use serde_json::json;
///
/// let id = RecordId::from_value(&json!("42")).unwrap();
/// assert_eq!(id.to_string(), "42");
/// assert!(id.matches(&json!(42)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordId {
    /// A string identifier.
    Str(String),
    /// An integer identifier.
    Int(i64),
}

impl RecordId {
    /// Extract an identifier from a raw JSON value.
    ///
    /// Returns `None` for JSON null, the empty string, and non-scalar
    /// values, so callers can sanitize reference inputs before resolution.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(RecordId::Str(s.clone())),
            Value::Number(n) => n.as_i64().map(RecordId::Int),
            _ => None,
        }
    }

    /// Returns this identifier as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            RecordId::Str(s) => Value::String(s.clone()),
            RecordId::Int(n) => Value::from(*n),
        }
    }

    /// Equality against a raw JSON value, with string/number coercion.
    ///
    /// A numeric id matches both the JSON number and its decimal string
    /// form, and vice versa. Used for reference-target filtering, where
    /// the id type of the referencing field and the referenced record
    /// frequently disagree.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (RecordId::Str(s), Value::String(v)) => s == v,
            (RecordId::Int(n), Value::Number(v)) => v.as_i64() == Some(*n),
            (RecordId::Str(s), Value::Number(v)) => {
                v.as_i64().is_some_and(|n| s == &n.to_string())
            }
            (RecordId::Int(n), Value::String(v)) => v == &n.to_string(),
            _ => false,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Str(s) => write!(f, "{}", s),
            RecordId::Int(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for RecordId {
    type Err = Error;

    /// Parse an identifier from its textual form.
    ///
    /// The textual form is preserved as a string id; coercion against
    /// numeric ids happens at comparison time via [`RecordId::matches`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidInputError::RecordId {
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(RecordId::Str(s.to_string()))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Str(s.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RecordId::Str(s) => serializer.serialize_str(s),
            RecordId::Int(n) => serializer.serialize_i64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RecordId::from_value(&value).ok_or_else(|| {
            serde::de::Error::custom("record id must be a non-empty string or an integer")
        })
    }
}
