//! Durable local key-value storage for the daily vote lock.
//!
//! The lock needs exactly one string key that survives process restarts and
//! is scoped to the local client profile. Storage failures propagate to the
//! caller; there is no fallback when local storage is unavailable.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::errors::LockError;

/// Durable local key-value storage scoped to the running client.
pub trait LocalStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, LockError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), LockError>;
}

/// File-backed local store persisting a JSON map of keys to string values.
///
/// The backing file lives under the client's data directory and is created
/// lazily on the first write.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `local_store.json` under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("local_store.json"),
        }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, LockError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| LockError::storage(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| LockError::serialization(e.to_string()))
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, LockError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LockError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| LockError::storage(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(&map)
            .map_err(|e| LockError::serialization(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| LockError::storage(e.to_string()))
    }
}

/// In-memory local store for tests and offline development.
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LockError> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LockError> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
