mod key_value_store;
mod memory_store;
mod persistence_error;
pub mod persistence_ops;
mod save_outcome;
mod storage_key;

pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use persistence_error::PersistenceError;
pub use save_outcome::SaveOutcome;
pub use storage_key::StorageKey;
