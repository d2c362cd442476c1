use super::RouteSource;
use crate::model::TravelMode;
use crate::provider::PointOfInterest;
use serde::{Deserialize, Serialize};

/// answer of the quick trip plan (QTP): the most affordable way to reach a
/// destination, found from the destination alone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickPlan {
    pub destination: String,
    pub mode: TravelMode,
    pub price: u32,
    pub duration_minutes: u32,
    pub distance_km: f64,
    pub route_source: RouteSource,
    pub nearby: Vec<PointOfInterest>,
}
