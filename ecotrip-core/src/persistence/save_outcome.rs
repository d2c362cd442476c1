use serde::{Deserialize, Serialize};

/// whether a mutation reached durable storage. a failed write is not an
/// error for the caller: the in-memory state is already updated and lasts
/// for the session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Persisted,
    MemoryOnly,
}
