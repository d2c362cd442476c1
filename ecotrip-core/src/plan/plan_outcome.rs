use super::{RequestTicket, RouteSource};
use crate::model::ModeEstimate;
use crate::provider::Place;
use crate::score::Recommendation;

/// the results of a completed planning request
#[derive(Clone, Debug, PartialEq)]
pub struct PlanResult {
    pub request: RequestTicket,
    pub origin: Place,
    pub destination: Place,
    pub distance_km: f64,
    pub route_source: RouteSource,
    /// ordered by the session preferences
    pub estimates: Vec<ModeEstimate>,
    pub recommendation: Option<Recommendation>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlanOutcome {
    Planned(PlanResult),
    /// a newer request was started before this one completed. its response
    /// was dropped and the session is unchanged.
    Discarded {
        request: RequestTicket,
        latest: RequestTicket,
    },
}
