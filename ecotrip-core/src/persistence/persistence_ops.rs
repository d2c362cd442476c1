use super::{KeyValueStore, PersistenceError, SaveOutcome, StorageKey};
use serde::{de::DeserializeOwned, Serialize};

/// reads and decodes the JSON blob stored under `key`.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> Result<Option<T>, PersistenceError> {
    match store.get(key)? {
        None => Ok(None),
        Some(blob) => {
            let value = serde_json::from_str(&blob)
                .map_err(|source| PersistenceError::DecodeError { key, source })?;
            Ok(Some(value))
        }
    }
}

/// encodes `value` as JSON and writes it under `key`, logging instead of
/// failing when the store rejects the write.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: StorageKey, value: &T) -> SaveOutcome {
    let result = serde_json::to_string(value)
        .map_err(|source| PersistenceError::EncodeError { key, source })
        .and_then(|blob| store.set(key, &blob));
    match result {
        Ok(_) => SaveOutcome::Persisted,
        Err(e) => {
            log::warn!("keeping '{key}' in memory only: {e}");
            SaveOutcome::MemoryOnly
        }
    }
}

/// removes `key`, logging instead of failing when the store rejects it.
pub fn remove(store: &dyn KeyValueStore, key: StorageKey) -> SaveOutcome {
    match store.remove(key) {
        Ok(_) => SaveOutcome::Persisted,
        Err(e) => {
            log::warn!("failed removing '{key}': {e}");
            SaveOutcome::MemoryOnly
        }
    }
}
