//! The data-provider trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;
use crate::query::{ListResult, Query};
use crate::record::Record;
use crate::types::{RecordId, ResourceName};

/// The abstract CRUD + list contract separating query logic from storage.
///
/// Any storage backend (in-memory, filesystem, remote API) implements
/// this trait; callers never address storage directly. All operations are
/// asynchronous and surface failures to the caller; there is no retry and
/// no cancellation in this layer.
///
/// Multi-id operations are uniformly best-effort: unknown ids are skipped
/// rather than aborting the batch, and the affected ids (or records) are
/// reported back.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// List records matching a query, with envelope metadata.
    async fn get_list(&self, resource: &ResourceName, query: &Query) -> Result<ListResult>;

    /// Fetch a single record by id.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) when no
    /// record has that id in that resource.
    async fn get_one(&self, resource: &ResourceName, id: &RecordId) -> Result<Record>;

    /// Fetch several records by id, omitting unknown ids.
    ///
    /// The default implementation is the fallback for backends without a
    /// batch primitive: one `get_one` per id, sequentially, aggregating
    /// results in input id order. `NotFound` failures are skipped; any
    /// other failure aborts the aggregate.
    async fn get_many(&self, resource: &ResourceName, ids: &[RecordId]) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get_one(resource, id).await {
                Ok(record) => records.push(record),
                Err(err) if err.is_not_found() => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(records)
    }

    /// List records whose `target` field references the given id.
    ///
    /// The target match is coerced equality (string and numeric id forms
    /// are interchangeable), never substring matching. The query then
    /// applies as in [`DataProvider::get_list`].
    async fn get_many_reference(
        &self,
        resource: &ResourceName,
        target: &str,
        id: &RecordId,
        query: &Query,
    ) -> Result<ListResult>;

    /// Create a record.
    ///
    /// The provider assigns the id (unless `data` carries one) and stamps
    /// `createdAt`; the stored record is returned.
    async fn create(&self, resource: &ResourceName, data: Value) -> Result<Record>;

    /// Patch a record with shallow-merge semantics.
    ///
    /// Provided fields overwrite, unspecified fields persist, `id` is
    /// immutable. Fails with `NotFound` when the record is absent.
    async fn update(&self, resource: &ResourceName, id: &RecordId, patch: Value)
    -> Result<Record>;

    /// Apply the same patch to several records, skipping unknown ids.
    ///
    /// Returns the ids actually patched.
    async fn update_many(
        &self,
        resource: &ResourceName,
        ids: &[RecordId],
        patch: Value,
    ) -> Result<Vec<RecordId>>;

    /// Delete a record, returning it.
    ///
    /// Fails with `NotFound` when the record is absent.
    async fn delete(&self, resource: &ResourceName, id: &RecordId) -> Result<Record>;

    /// Delete several records, skipping unknown ids.
    ///
    /// Returns the ids actually removed.
    async fn delete_many(&self, resource: &ResourceName, ids: &[RecordId])
    -> Result<Vec<RecordId>>;
}
