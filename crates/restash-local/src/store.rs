//! Filesystem storage for the file-backed provider.
//!
//! Each resource is one JSON file holding the whole collection as an
//! array of records. The unit of mutation is the whole collection:
//! mutations read the file, change the array in memory, and write it
//! back. Unlike the unguarded read-modify-write this model is usually
//! paired with, every mutation here runs under an exclusive lock file,
//! so concurrent writers cannot lose updates.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument};

use restash_core::error::{Error, StorageError};
use restash_core::{Record, ResourceName, Result};

fn map_io(err: std::io::Error) -> Error {
    Error::Storage(StorageError::Io {
        message: err.to_string(),
    })
}

/// Filesystem-backed storage for resource collections.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the resources directory.
    fn resources_dir(&self) -> PathBuf {
        self.root.join("resources")
    }

    /// Get the collection file path for a resource.
    fn resource_path(&self, resource: &ResourceName) -> PathBuf {
        self.resources_dir()
            .join(format!("{}.json", resource.as_str()))
    }

    /// Get the lock file path for a resource.
    fn lock_path(&self, resource: &ResourceName) -> PathBuf {
        self.resources_dir()
            .join(format!("{}.lock", resource.as_str()))
    }

    /// Load the whole collection for a resource.
    ///
    /// A missing file is an empty collection, not an error.
    #[instrument(skip(self))]
    pub fn load(&self, resource: &ResourceName) -> Result<Vec<Record>> {
        let path = self.resource_path(resource);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(map_io)?;
        let records: Vec<Record> = serde_json::from_str(&content)?;

        debug!(resource = %resource, count = records.len(), "Loaded collection");

        Ok(records)
    }

    /// Persist the whole collection for a resource.
    ///
    /// Writes go through a temp file and a rename, so readers never see
    /// a partially written collection.
    #[instrument(skip(self, records))]
    pub fn save(&self, resource: &ResourceName, records: &[Record]) -> Result<()> {
        let path = self.resource_path(resource);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let content = serde_json::to_string_pretty(records)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        debug!(resource = %resource, count = records.len(), "Saved collection");

        Ok(())
    }

    /// Run a read-modify-write mutation under the resource's lock.
    ///
    /// The exclusive lock brackets load, mutate, and save, serializing
    /// concurrent mutations of the same resource across processes.
    pub fn with_lock<T>(
        &self,
        resource: &ResourceName,
        f: impl FnOnce(&mut Vec<Record>) -> Result<T>,
    ) -> Result<T> {
        let lock_path = self.lock_path(resource);

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io)?;

        lock_file.lock_exclusive().map_err(|e| {
            Error::Storage(StorageError::Lock {
                message: e.to_string(),
            })
        })?;

        let result = (|| {
            let mut records = self.load(resource)?;
            let out = f(&mut records)?;
            self.save(resource, &records)?;
            Ok(out)
        })();

        let _ = lock_file.unlock();

        result
    }

    /// List the resources known to this store.
    pub fn list_resources(&self) -> Result<Vec<String>> {
        let dir = self.resources_dir();

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();

        for entry in fs::read_dir(&dir).map_err(map_io)? {
            let entry = entry.map_err(map_io)?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }

        names.sort();

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn users() -> ResourceName {
        ResourceName::new("users").unwrap()
    }

    #[test]
    fn load_missing_collection_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.load(&users()).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        let records = vec![Record::new(json!({"id": "1", "name": "Alice"})).unwrap()];
        store.save(&users(), &records).unwrap();

        let loaded = store.load(&users()).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn with_lock_persists_mutation() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store
            .with_lock(&users(), |records| {
                records.push(Record::new(json!({"id": "1"})).unwrap());
                Ok(())
            })
            .unwrap();

        assert_eq!(store.load(&users()).unwrap().len(), 1);
    }

    #[test]
    fn list_resources_skips_lock_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.with_lock(&users(), |_| Ok(())).unwrap();
        store
            .save(&ResourceName::new("posts").unwrap(), &[])
            .unwrap();

        assert_eq!(store.list_resources().unwrap(), vec!["posts", "users"]);
    }
}
