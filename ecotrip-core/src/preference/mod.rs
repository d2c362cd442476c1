pub mod preference_ops;
mod trip_preferences;

pub use preference_ops::apply_preferences;
pub use trip_preferences::TripPreferences;
