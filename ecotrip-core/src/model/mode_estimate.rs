use super::TravelMode;
use serde::{Deserialize, Serialize};

/// duration, cost and carbon estimate for a single travel mode of a planning request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModeEstimate {
    pub mode: TravelMode,
    #[serde(rename = "durationMin", alias = "durationMinutes")]
    pub duration_minutes: u32,
    pub co2_kg: f64,
    pub cost: u32,
    /// emissions avoided versus driving alone. only set for carpool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_saved_kg: Option<f64>,
}
