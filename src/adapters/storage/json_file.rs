//! File-based Entitlement Store Adapter
//!
//! Persists the key-value pairs as a single JSON document on disk. This is
//! the durable store for a real installation: the record must survive
//! process restarts.
//!
//! Writes go through a temp file followed by a rename so a crash mid-write
//! cannot leave a half-written document behind.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{EntitlementStore, EntitlementStoreError};

/// JSON-file-backed key-value store for entitlement state.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the document.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file and its parent directory are created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<HashMap<String, String>, EntitlementStoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| EntitlementStoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(EntitlementStoreError::Io(e.to_string())),
        }
    }

    async fn write_document(
        &self,
        document: &HashMap<String, String>,
    ) -> Result<(), EntitlementStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| EntitlementStoreError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| EntitlementStoreError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .await
            .map_err(|e| EntitlementStoreError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| EntitlementStoreError::Io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl EntitlementStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, EntitlementStoreError> {
        Ok(self.read_document().await?.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), EntitlementStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document).await
    }

    async fn remove(&self, key: &str) -> Result<(), EntitlementStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        if document.remove(key).is_some() {
            self.write_document(&document).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::keys;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("entitlements.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(keys::IS_PRO).await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entitlements.json");

        let store = JsonFileStore::new(&path);
        store.put(keys::LEAD_COUNT, "4").await.unwrap();
        drop(store);

        // Simulates a process restart.
        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get(keys::LEAD_COUNT).await.unwrap().as_deref(),
            Some("4")
        );
    }

    #[tokio::test]
    async fn multiple_keys_share_one_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.put(keys::IS_PRO, "true").await.unwrap();
        store.put(keys::LEAD_COUNT, "7").await.unwrap();

        assert_eq!(store.get(keys::IS_PRO).await.unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(keys::LEAD_COUNT).await.unwrap().as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn remove_deletes_only_the_named_key() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.put(keys::USER_ID, "user-1").await.unwrap();
        store.put(keys::LEAD_COUNT, "2").await.unwrap();
        store.remove(keys::USER_ID).await.unwrap();

        assert_eq!(store.get(keys::USER_ID).await.unwrap(), None);
        assert_eq!(store.get(keys::LEAD_COUNT).await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn corrupt_document_surfaces_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entitlements.json");
        std::fs::write(&path, "not json {").unwrap();

        let store = JsonFileStore::new(&path);
        let result = store.get(keys::IS_PRO).await;
        assert!(matches!(
            result,
            Err(EntitlementStoreError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn no_temp_file_left_behind_after_write() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.put(keys::IS_PRO, "true").await.unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "tmp").unwrap_or(false))
            .collect();
        assert!(leftovers.is_empty());
    }
}
