//! Validated record type.
//!
//! This module provides [`Record`], a type that guarantees the value is a
//! valid record payload (a JSON object with a scalar `id` field).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, InvalidInputError};
use crate::types::RecordId;

/// The identifier field every record must carry.
pub const ID_FIELD: &str = "id";

/// The creation-timestamp field assigned by providers.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// A validated record.
///
/// This type guarantees that:
/// - The value is a JSON object
/// - The object contains an `id` field
/// - The `id` field is a non-empty string or an integer
///
/// These invariants are enforced at construction and deserialization time,
/// making it impossible to create an invalid `Record`. Beyond the `id`
/// field, records are schema-agnostic; interpretation is left to callers.
///
/// # Example
///
/// ```
/// use restash_core::Record;
/// use serde_json::json;
///
/// let record = Record::new(json!({
///     "id": "1",
///     "name": "Alice"
/// })).unwrap();
///
/// assert_eq!(record.id().to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Value);

impl Record {
    /// Create a new `Record` from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object, lacks an `id`
    /// field, or the `id` field is not a non-empty string or integer.
    pub fn new(value: Value) -> Result<Self, Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Create a new `Record` with the given id and additional fields.
    ///
    /// This is a convenience constructor that ensures `id` is set
    /// correctly, overriding any `id` already present in `value`.
    pub fn with_id(id: RecordId, mut value: Value) -> Result<Self, Error> {
        let obj = value.as_object_mut().ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::Record {
                reason: "record must be a JSON object".to_string(),
            })
        })?;

        obj.insert(ID_FIELD.to_string(), id.to_value());

        Self::new(value)
    }

    /// Get the record identifier.
    ///
    /// Guaranteed to succeed due to construction invariants.
    pub fn id(&self) -> RecordId {
        // Safe: validated at construction
        RecordId::from_value(&self.0[ID_FIELD]).unwrap()
    }

    /// Get a field from the record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a reference to the inner JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume and return the inner JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Apply a patch with shallow-merge semantics.
    ///
    /// Top-level fields of the patch overwrite the record's fields;
    /// unspecified fields persist. The `id` field is immutable: a patch
    /// carrying an `id` does not change the record's identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch is not a JSON object.
    pub fn merge(&mut self, patch: &Value) -> Result<(), Error> {
        let patch = patch.as_object().ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::Record {
                reason: "patch must be a JSON object".to_string(),
            })
        })?;

        let id = self.0[ID_FIELD].clone();

        // Safe: validated at construction
        let obj = self.0.as_object_mut().unwrap();
        for (key, value) in patch {
            obj.insert(key.clone(), value.clone());
        }
        obj.insert(ID_FIELD.to_string(), id);

        Ok(())
    }

    fn validate(value: &Value) -> Result<(), Error> {
        let obj = value.as_object().ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::Record {
                reason: "record must be a JSON object".to_string(),
            })
        })?;

        let id = obj.get(ID_FIELD).ok_or_else(|| {
            Error::InvalidInput(InvalidInputError::Record {
                reason: "record must contain an 'id' field".to_string(),
            })
        })?;

        if RecordId::from_value(id).is_none() {
            return Err(Error::InvalidInput(InvalidInputError::Record {
                reason: "'id' field must be a non-empty string or an integer".to_string(),
            }));
        }

        Ok(())
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Record::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_record() {
        let record = Record::new(json!({"id": 1, "name": "Alice"})).unwrap();
        assert_eq!(record.id(), RecordId::Int(1));
        assert_eq!(record.get("name").unwrap(), "Alice");
    }

    #[test]
    fn test_with_id_overrides_existing() {
        let record = Record::with_id("new".into(), json!({"id": "old", "x": 1})).unwrap();
        assert_eq!(record.id(), RecordId::Str("new".to_string()));
    }

    #[test]
    fn test_missing_id_fails() {
        assert!(Record::new(json!({"name": "Alice"})).is_err());
    }

    #[test]
    fn test_invalid_id_fails() {
        assert!(Record::new(json!({"id": null})).is_err());
        assert!(Record::new(json!({"id": ""})).is_err());
        assert!(Record::new(json!({"id": [1]})).is_err());
    }

    #[test]
    fn test_not_object_fails() {
        assert!(Record::new(json!([1, 2, 3])).is_err());
        assert!(Record::new(json!("string")).is_err());
        assert!(Record::new(json!(null)).is_err());
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut record =
            Record::new(json!({"id": 1, "name": "Alice", "meta": {"a": 1, "b": 2}})).unwrap();
        record.merge(&json!({"meta": {"a": 9}, "role": "admin"})).unwrap();

        assert_eq!(record.get("name").unwrap(), "Alice");
        assert_eq!(record.get("role").unwrap(), "admin");
        // Nested objects are replaced wholesale, not merged.
        assert_eq!(record.get("meta").unwrap(), &json!({"a": 9}));
    }

    #[test]
    fn test_merge_preserves_id() {
        let mut record = Record::new(json!({"id": 1})).unwrap();
        record.merge(&json!({"id": 2, "name": "Bob"})).unwrap();
        assert_eq!(record.id(), RecordId::Int(1));
    }

    #[test]
    fn test_merge_rejects_non_object_patch() {
        let mut record = Record::new(json!({"id": 1})).unwrap();
        assert!(record.merge(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_deserialize_invalid_fails() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"name": "no id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let original = json!({"id": "a", "n": 42});
        let record = Record::new(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), original);
    }
}
