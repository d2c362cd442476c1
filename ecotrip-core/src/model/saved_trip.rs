use super::{ModeEstimate, TravelMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// a planning result the user chose to keep. immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedTrip {
    #[serde(rename = "from", alias = "origin")]
    pub origin: String,
    #[serde(rename = "to", alias = "destination")]
    pub destination: String,
    pub mode: TravelMode,
    #[serde(rename = "durationMin", alias = "durationMinutes")]
    pub duration_minutes: u32,
    pub co2_kg: f64,
    pub cost: u32,
    #[serde(rename = "date", alias = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl SavedTrip {
    pub fn from_estimate(
        origin: &str,
        destination: &str,
        estimate: &ModeEstimate,
        timestamp: DateTime<Utc>,
    ) -> SavedTrip {
        SavedTrip {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode: estimate.mode,
            duration_minutes: estimate.duration_minutes,
            co2_kg: estimate.co2_kg,
            cost: estimate.cost,
            timestamp,
        }
    }
}
