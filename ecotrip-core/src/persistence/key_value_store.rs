use super::{PersistenceError, StorageKey};

/// whole-blob persistence keyed by logical name. implementations are
/// injected into the trip repository and rewards ledger; a failing store
/// never stops the core, which keeps its state in memory instead.
pub trait KeyValueStore: Send + Sync {
    /// reads the blob stored under `key`, if any
    fn get(&self, key: StorageKey) -> Result<Option<String>, PersistenceError>;

    /// replaces the blob stored under `key`. a reader never observes a
    /// partially written blob.
    fn set(&self, key: StorageKey, blob: &str) -> Result<(), PersistenceError>;

    /// removes the blob stored under `key`. removing a missing key is not an error.
    fn remove(&self, key: StorageKey) -> Result<(), PersistenceError>;
}
