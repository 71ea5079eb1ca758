//! In-Memory Entitlement Store Adapter
//!
//! Keeps the key-value pairs in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{EntitlementStore, EntitlementStoreError};

/// In-memory key-value store for entitlement state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntitlementStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryEntitlementStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
    async fn get(&self, key: &str) -> Result<Option<String>, EntitlementStoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), EntitlementStoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), EntitlementStoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
