mod estimate_error;
pub mod estimate_ops;
mod mode_rates;

pub use estimate_error::EstimateError;
pub use estimate_ops::estimate;
pub use mode_rates::ModeRates;
