mod coordinate;
mod geocode_provider;
mod haversine_route_provider;
mod offline_gazetteer;
mod place;
mod point_of_interest;
mod provider_error;
mod route_estimate;
mod route_provider;

pub use coordinate::Coordinate;
pub use geocode_provider::GeocodeProvider;
pub use haversine_route_provider::HaversineRouteProvider;
pub use offline_gazetteer::{GazetteerEntry, OfflineGazetteer};
pub use place::Place;
pub use point_of_interest::PointOfInterest;
pub use provider_error::ProviderError;
pub use route_estimate::RouteEstimate;
pub use route_provider::RouteProvider;
