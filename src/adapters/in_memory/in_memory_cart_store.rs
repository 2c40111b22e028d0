// In memory implementation of the CartStore port.
//
// Purpose
// - Support tests and development for verifying the write-through mirror.
//
// Responsibilities
// - Hold blobs per key for inspection.
// - Simulate a failing backend via a fail-writes toggle.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::core::ports::{CartStore, StoreError};

#[derive(Default)]
pub struct InMemoryCartStore {
    blobs: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_fail_writes(&self) {
        self.fail_writes.fetch_xor(true, Ordering::SeqCst);
    }

    /// Current blob under a key, for test assertions.
    pub async fn snapshot(&self, key: &str) -> Option<String> {
        self.blobs.read().await.get(key).cloned()
    }
}

#[async_trait::async_trait]
impl CartStore for InMemoryCartStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("store offline".into()));
        }
        self.blobs
            .write()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
