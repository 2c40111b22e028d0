// File-backed implementation of the CartStore port.
//
// Purpose
// - Persist cart snapshots across sessions: one JSON file per key under a
//   data directory.
//
// Responsibilities
// - Atomic writes: the blob lands in a temp file first and is renamed over
//   the target, so a crash mid-write never leaves a half-written snapshot.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::ports::{CartStore, StoreError};

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl CartStore for JsonFileStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Backend(err.to_string())),
        }
    }

    async fn write(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let dir = self.dir.clone();
        let path = self.path_for(key);
        let blob = blob.to_string();
        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            std::fs::create_dir_all(&dir)
                .map_err(|err| StoreError::Backend(err.to_string()))?;
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)
                .map_err(|err| StoreError::Backend(err.to_string()))?;
            tmp.write_all(blob.as_bytes())
                .map_err(|err| StoreError::Backend(err.to_string()))?;
            tmp.persist(&path)
                .map_err(|err| StoreError::Backend(err.to_string()))?;
            Ok(())
        })
        .await
        .map_err(|err| StoreError::Backend(err.to_string()))?
    }
}
