use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("trip distance must be a positive number of kilometers, found {0}")]
    InvalidDistance(f64),
}
