// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Last computed report, persisted in a key-value store.
//!
//! A single slot under a fixed key holds `{ownerId, data}`. Callers compare
//! the owner against the current athlete and clear the slot on mismatch;
//! [`ReportCache::read_for_owner`] does both.

use crate::models::Statistics;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Key of the report slot.
pub const STORAGE_KEY: &str = "statistics";

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;

        // Write then rename so readers never see a partial file
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, used for tests and offline mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stored slot contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedReport {
    /// Strava athlete ID the report was computed for
    pub owner_id: u64,
    pub data: Statistics,
}

/// Report cache over any [`KeyValueStore`].
#[derive(Clone)]
pub struct ReportCache {
    store: Arc<dyn KeyValueStore>,
}

impl ReportCache {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Cache backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Store `report` as the last report of `owner_id`, replacing any previous one.
    pub fn persist(&self, owner_id: u64, report: &Statistics) -> Result<(), CacheError> {
        let value = serde_json::to_string(&CachedReport {
            owner_id,
            data: report.clone(),
        })?;
        self.store.set(STORAGE_KEY, &value)?;

        tracing::debug!(owner_id, "Report cached");
        Ok(())
    }

    /// Read the slot.
    ///
    /// Returns `None` when the slot is empty, unreadable or fails to
    /// deserialize.
    pub fn read(&self) -> Option<CachedReport> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cached report");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cached) => Some(cached),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed cached report");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), CacheError> {
        self.store.remove(STORAGE_KEY)
    }

    /// Cached report of `owner_id`.
    ///
    /// A report owned by someone else is cleared and `None` is returned.
    pub fn read_for_owner(&self, owner_id: u64) -> Result<Option<Statistics>, CacheError> {
        match self.read() {
            Some(cached) if cached.owner_id == owner_id => Ok(Some(cached.data)),
            Some(cached) => {
                tracing::info!(
                    owner_id,
                    cached_owner_id = cached.owner_id,
                    "Cached report belongs to another athlete, clearing"
                );
                self.clear()?;
                Ok(None)
            }
            None => Ok(None),
        }
    }
}
