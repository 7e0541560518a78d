//! File-backed data provider.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, instrument};
use uuid::Uuid;

use restash_core::error::{Error, InvalidInputError};
use restash_core::provider::DataProvider;
use restash_core::query::{ListResult, Query, apply, apply_reference};
use restash_core::record::CREATED_AT_FIELD;
use restash_core::{Record, RecordId, ResourceName, Result};

use crate::store::FileStore;

/// Filesystem-backed [`DataProvider`].
///
/// Reads load the resource's collection file and run the pure query
/// engine over it; mutations run under the store's per-resource lock.
#[derive(Debug, Clone)]
pub struct FileProvider {
    store: FileStore,
}

impl FileProvider {
    /// Create a new file-backed provider rooted at the given directory.
    pub fn new(root: impl AsRef<std::path::Path>) -> Self {
        Self {
            store: FileStore::new(root),
        }
    }

    /// Access the underlying file store.
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// List the resources known to this provider.
    pub fn list_resources(&self) -> Result<Vec<String>> {
        self.store.list_resources()
    }
}

/// Build the stored record for a create: assign id and `createdAt`.
///
/// A caller-provided id is honored so imports can keep their keys;
/// everything else gets a UUID. `createdAt` is only stamped when the
/// caller did not supply one.
pub(crate) fn prepare_create(
    resource: &ResourceName,
    records: &[Record],
    data: Value,
) -> Result<Record> {
    let id = match data.get("id").map(RecordId::from_value) {
        Some(Some(id)) => id,
        Some(None) => {
            return Err(Error::InvalidInput(InvalidInputError::Record {
                reason: "'id' field must be a non-empty string or an integer".to_string(),
            }));
        }
        None => RecordId::Str(Uuid::new_v4().to_string()),
    };

    if records.iter().any(|r| r.id() == id) {
        return Err(Error::InvalidInput(InvalidInputError::DuplicateId {
            resource: resource.as_str().to_string(),
            id: id.to_string(),
        }));
    }

    let mut record = Record::with_id(id, data)?;

    if record.get(CREATED_AT_FIELD).is_none() {
        let mut stamp = serde_json::Map::new();
        stamp.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        record.merge(&Value::Object(stamp))?;
    }

    Ok(record)
}

#[async_trait]
impl DataProvider for FileProvider {
    #[instrument(skip(self, query), fields(%resource))]
    async fn get_list(&self, resource: &ResourceName, query: &Query) -> Result<ListResult> {
        let records = self.store.load(resource)?;
        Ok(apply(records, query))
    }

    #[instrument(skip(self), fields(%resource, %id))]
    async fn get_one(&self, resource: &ResourceName, id: &RecordId) -> Result<Record> {
        self.store
            .load(resource)?
            .into_iter()
            .find(|r| &r.id() == id)
            .ok_or_else(|| Error::not_found(resource.as_str(), id))
    }

    // Batch primitive: one load instead of one read per id. Unknown ids
    // are omitted; results follow input id order.
    #[instrument(skip(self, ids), fields(%resource, count = ids.len()))]
    async fn get_many(&self, resource: &ResourceName, ids: &[RecordId]) -> Result<Vec<Record>> {
        let records = self.store.load(resource)?;

        Ok(ids
            .iter()
            .filter_map(|id| records.iter().find(|r| &r.id() == id).cloned())
            .collect())
    }

    #[instrument(skip(self, query), fields(%resource, %id))]
    async fn get_many_reference(
        &self,
        resource: &ResourceName,
        target: &str,
        id: &RecordId,
        query: &Query,
    ) -> Result<ListResult> {
        let records = self.store.load(resource)?;
        Ok(apply_reference(records, target, id, query))
    }

    #[instrument(skip(self, data), fields(%resource))]
    async fn create(&self, resource: &ResourceName, data: Value) -> Result<Record> {
        let record = self.store.with_lock(resource, |records| {
            let record = prepare_create(resource, records, data)?;
            records.push(record.clone());
            Ok(record)
        })?;

        debug!(resource = %resource, id = %record.id(), "Created record");

        Ok(record)
    }

    #[instrument(skip(self, patch), fields(%resource, %id))]
    async fn update(
        &self,
        resource: &ResourceName,
        id: &RecordId,
        patch: Value,
    ) -> Result<Record> {
        let record = self.store.with_lock(resource, |records| {
            let record = records
                .iter_mut()
                .find(|r| &r.id() == id)
                .ok_or_else(|| Error::not_found(resource.as_str(), id))?;

            record.merge(&patch)?;
            Ok(record.clone())
        })?;

        debug!(resource = %resource, id = %id, "Updated record");

        Ok(record)
    }

    #[instrument(skip(self, ids, patch), fields(%resource, count = ids.len()))]
    async fn update_many(
        &self,
        resource: &ResourceName,
        ids: &[RecordId],
        patch: Value,
    ) -> Result<Vec<RecordId>> {
        let touched = self.store.with_lock(resource, |records| {
            let mut touched = Vec::new();
            for id in ids {
                if let Some(record) = records.iter_mut().find(|r| &r.id() == id) {
                    record.merge(&patch)?;
                    touched.push(id.clone());
                }
            }
            Ok(touched)
        })?;

        debug!(resource = %resource, touched = touched.len(), "Patched records");

        Ok(touched)
    }

    #[instrument(skip(self), fields(%resource, %id))]
    async fn delete(&self, resource: &ResourceName, id: &RecordId) -> Result<Record> {
        let record = self.store.with_lock(resource, |records| {
            let index = records
                .iter()
                .position(|r| &r.id() == id)
                .ok_or_else(|| Error::not_found(resource.as_str(), id))?;

            Ok(records.remove(index))
        })?;

        debug!(resource = %resource, id = %id, "Deleted record");

        Ok(record)
    }

    #[instrument(skip(self, ids), fields(%resource, count = ids.len()))]
    async fn delete_many(
        &self,
        resource: &ResourceName,
        ids: &[RecordId],
    ) -> Result<Vec<RecordId>> {
        let removed = self.store.with_lock(resource, |records| {
            let mut removed = Vec::new();
            for id in ids {
                if let Some(index) = records.iter().position(|r| &r.id() == id) {
                    records.remove(index);
                    removed.push(id.clone());
                }
            }
            Ok(removed)
        })?;

        debug!(resource = %resource, removed = removed.len(), "Deleted records");

        Ok(removed)
    }
}
