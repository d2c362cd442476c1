use ecotrip_core::{persistence::PersistenceError, plan::PlanError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    PlanError(#[from] PlanError),
    #[error(transparent)]
    PersistenceError(#[from] PersistenceError),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure rendering configuration: {0}")]
    ConfigWriteError(#[from] toml::ser::Error),
    #[error("no trip with id '{0}'")]
    TripNotFound(String),
    #[error("no store item matching '{0}'")]
    UnknownItem(String),
    #[error("insufficient balance: {balance} points available, {cost} required")]
    InsufficientBalance { balance: u32, cost: u32 },
}
