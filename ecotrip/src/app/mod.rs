mod app_error;
mod ecotrip_app;
mod ecotrip_config;
mod operation;
mod rewards_operation;
mod trips_operation;

pub use app_error::AppError;
pub use ecotrip_app::EcoTripApp;
pub use ecotrip_config::EcoTripConfig;
pub use operation::Operation;
pub use rewards_operation::RewardsOperation;
pub use trips_operation::TripsOperation;
