use super::{Place, ProviderError, RouteEstimate};
use crate::model::TravelMode;

/// looks up the distance, and possibly the duration, of a trip for a mode.
/// implementations should bound their own latency; the planner makes a
/// single call per user action and falls back to the offline gazetteer on
/// any error.
pub trait RouteProvider {
    fn route(
        &self,
        origin: &Place,
        destination: &Place,
        mode: &TravelMode,
    ) -> Result<RouteEstimate, ProviderError>;
}
