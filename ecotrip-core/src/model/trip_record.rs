use super::{SavedTrip, TravelMode};
use crate::estimate::ModeRates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// an entry of the "My Trips" collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    #[serde(rename = "durationMin", alias = "durationMinutes")]
    pub duration_minutes: u32,
    pub distance_km: f64,
    pub cost: u32,
    #[serde(rename = "co2Saved")]
    pub co2_saved_kg: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub favorite: bool,
}

impl TripRecord {
    /// builds a trip record from a saved planning result. the CO₂ saved is
    /// measured against driving the same distance alone.
    pub fn from_saved(id: String, saved: &SavedTrip, distance_km: f64) -> TripRecord {
        let car_baseline = ModeRates::for_mode(&TravelMode::Car).co2_kg(distance_km);
        TripRecord {
            id,
            origin: saved.origin.clone(),
            destination: saved.destination.clone(),
            mode: saved.mode,
            duration_minutes: saved.duration_minutes,
            distance_km,
            cost: saved.cost,
            co2_saved_kg: (car_baseline - saved.co2_kg).max(0.0),
            timestamp: saved.timestamp,
            favorite: false,
        }
    }
}
