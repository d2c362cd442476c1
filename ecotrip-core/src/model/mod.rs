mod mode_estimate;
mod saved_trip;
mod travel_mode;
mod trip_record;

pub use mode_estimate::ModeEstimate;
pub use saved_trip::SavedTrip;
pub use travel_mode::TravelMode;
pub use trip_record::TripRecord;
