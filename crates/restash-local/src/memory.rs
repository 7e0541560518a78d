//! In-memory data provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use restash_core::error::Error;
use restash_core::provider::DataProvider;
use restash_core::query::{ListResult, Query, apply, apply_reference};
use restash_core::{Record, RecordId, ResourceName, Result};

use crate::provider::prepare_create;

/// In-memory [`DataProvider`] for tests, demos, and ephemeral data.
///
/// Collections live in a `RwLock`ed map keyed by resource name; every
/// mutation holds the write lock across its read-modify-write, so
/// concurrent mutations of the same resource cannot lose updates.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    collections: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a resource with records, replacing any existing collection.
    pub async fn with_records(self, resource: &ResourceName, records: Vec<Record>) -> Self {
        self.collections
            .write()
            .await
            .insert(resource.as_str().to_string(), records);
        self
    }

    async fn load(&self, resource: &ResourceName) -> Vec<Record> {
        self.collections
            .read()
            .await
            .get(resource.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DataProvider for MemoryProvider {
    async fn get_list(&self, resource: &ResourceName, query: &Query) -> Result<ListResult> {
        Ok(apply(self.load(resource).await, query))
    }

    async fn get_one(&self, resource: &ResourceName, id: &RecordId) -> Result<Record> {
        self.load(resource)
            .await
            .into_iter()
            .find(|r| &r.id() == id)
            .ok_or_else(|| Error::not_found(resource.as_str(), id))
    }

    async fn get_many(&self, resource: &ResourceName, ids: &[RecordId]) -> Result<Vec<Record>> {
        let records = self.load(resource).await;

        Ok(ids
            .iter()
            .filter_map(|id| records.iter().find(|r| &r.id() == id).cloned())
            .collect())
    }

    async fn get_many_reference(
        &self,
        resource: &ResourceName,
        target: &str,
        id: &RecordId,
        query: &Query,
    ) -> Result<ListResult> {
        Ok(apply_reference(self.load(resource).await, target, id, query))
    }

    async fn create(&self, resource: &ResourceName, data: Value) -> Result<Record> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(resource.as_str().to_string()).or_default();

        let record = prepare_create(resource, records, data)?;
        records.push(record.clone());

        Ok(record)
    }

    async fn update(
        &self,
        resource: &ResourceName,
        id: &RecordId,
        patch: Value,
    ) -> Result<Record> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(resource.as_str().to_string()).or_default();

        let record = records
            .iter_mut()
            .find(|r| &r.id() == id)
            .ok_or_else(|| Error::not_found(resource.as_str(), id))?;

        record.merge(&patch)?;
        Ok(record.clone())
    }

    async fn update_many(
        &self,
        resource: &ResourceName,
        ids: &[RecordId],
        patch: Value,
    ) -> Result<Vec<RecordId>> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(resource.as_str().to_string()).or_default();

        let mut touched = Vec::new();
        for id in ids {
            if let Some(record) = records.iter_mut().find(|r| &r.id() == id) {
                record.merge(&patch)?;
                touched.push(id.clone());
            }
        }

        Ok(touched)
    }

    async fn delete(&self, resource: &ResourceName, id: &RecordId) -> Result<Record> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(resource.as_str().to_string()).or_default();

        let index = records
            .iter()
            .position(|r| &r.id() == id)
            .ok_or_else(|| Error::not_found(resource.as_str(), id))?;

        Ok(records.remove(index))
    }

    async fn delete_many(
        &self,
        resource: &ResourceName,
        ids: &[RecordId],
    ) -> Result<Vec<RecordId>> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(resource.as_str().to_string()).or_default();

        let mut removed = Vec::new();
        for id in ids {
            if let Some(index) = records.iter().position(|r| &r.id() == id) {
                records.remove(index);
                removed.push(id.clone());
            }
        }

        Ok(removed)
    }
}
