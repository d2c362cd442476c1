mod seed_trips;
mod trip_filter;
mod trip_mutation;
mod trip_repository;
mod trip_sort_key;
mod trip_summary;

pub use seed_trips::seed_trips;
pub use trip_filter::TripFilter;
pub use trip_mutation::TripMutation;
pub use trip_repository::TripRepository;
pub use trip_sort_key::TripSortKey;
pub use trip_summary::TripSummary;
