use crate::model::{TravelMode, TripRecord};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// aggregate statistics shown above the trip list
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub total_trips: usize,
    pub total_co2_saved_kg: f64,
    /// None when there are no trips
    pub most_used_mode: Option<TravelMode>,
    pub average_duration_minutes: u32,
}

impl TripSummary {
    pub fn from_trips(trips: &[TripRecord]) -> TripSummary {
        let total_trips = trips.len();
        let total_co2_saved_kg = trips.iter().map(|t| t.co2_saved_kg).sum();
        let counts = trips.iter().map(|t| t.mode).counts();
        // walk the fixed enumeration and only replace on a strictly higher
        // count, so ties resolve to the earlier mode
        let most_used_mode = TravelMode::ALL
            .iter()
            .filter_map(|m| counts.get(m).map(|c| (*m, *c)))
            .fold(None, |acc: Option<(TravelMode, usize)>, (m, c)| match acc {
                Some((_, best)) if best >= c => acc,
                _ => Some((m, c)),
            })
            .map(|(m, _)| m);
        let average_duration_minutes = if total_trips == 0 {
            0
        } else {
            let sum: u64 = trips.iter().map(|t| t.duration_minutes as u64).sum();
            (sum as f64 / total_trips as f64).round() as u32
        };
        TripSummary {
            total_trips,
            total_co2_saved_kg,
            most_used_mode,
            average_duration_minutes,
        }
    }
}
