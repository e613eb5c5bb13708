// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-file-backed key-value store.
//!
//! A single JSON object on disk, read once at open and rewritten on
//! every mutation. Write volume here is a handful of small values per
//! user action, so whole-file rewrites are fine.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::store::{KeyValueStore, StoreError};

/// Durable store persisting to one JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating the parent directory if
    /// needed. A missing file starts the store empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                tracing::warn!(dir = %dir.display(), "Storage directory does not exist, creating it");
                fs::create_dir_all(dir).map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| StoreError::Io(e.to_string()))?;
            serde_json::from_str(&raw).map_err(|e| StoreError::Encoding(e.to_string()))?
        } else {
            HashMap::new()
        };

        tracing::debug!(path = %path.display(), "Opened file store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock still holds a coherent map; take it.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string_pretty(entries).map_err(|e| StoreError::Encoding(e.to_string()))?;
        fs::write(&self.path, encoded).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.lock();
        if entries.remove(key).is_some() {
            return self.flush(&entries);
        }
        Ok(())
    }
}
