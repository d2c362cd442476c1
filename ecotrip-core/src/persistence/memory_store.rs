use super::{KeyValueStore, PersistenceError, StorageKey};
use std::collections::HashMap;
use std::sync::Mutex;

/// a key-value store living only for the current session
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<StorageKey, String>>, PersistenceError> {
        self.blobs
            .lock()
            .map_err(|e| PersistenceError::Unavailable(format!("memory store lock poisoned: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>, PersistenceError> {
        Ok(self.lock()?.get(&key).cloned())
    }

    fn set(&self, key: StorageKey, blob: &str) -> Result<(), PersistenceError> {
        self.lock()?.insert(key, blob.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), PersistenceError> {
        self.lock()?.remove(&key);
        Ok(())
    }
}
