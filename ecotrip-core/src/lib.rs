pub mod estimate;
pub mod model;
pub mod persistence;
pub mod plan;
pub mod preference;
pub mod provider;
pub mod rewards;
pub mod score;
pub mod trips;
