use super::StorageKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failure reading '{key}': {message}")]
    ReadError { key: StorageKey, message: String },
    #[error("failure writing '{key}': {message}")]
    WriteError { key: StorageKey, message: String },
    #[error("stored value for '{key}' is not valid JSON: {source}")]
    DecodeError {
        key: StorageKey,
        source: serde_json::Error,
    },
    #[error("failure encoding value for '{key}': {source}")]
    EncodeError {
        key: StorageKey,
        source: serde_json::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
