use crate::model::TripRecord;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// display orderings for the trip list. every ordering is a stable sort, so
/// exact ties keep their insertion order.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripSortKey {
    /// newest first
    #[default]
    Recent,
    /// most CO₂ saved first
    Co2,
    /// shortest first
    Duration,
}

impl TripSortKey {
    pub fn sort(&self, trips: &[TripRecord]) -> Vec<TripRecord> {
        let mut result = trips.to_vec();
        match self {
            TripSortKey::Recent => result.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            TripSortKey::Co2 => result.sort_by(|a, b| b.co2_saved_kg.total_cmp(&a.co2_saved_kg)),
            TripSortKey::Duration => result.sort_by_key(|t| t.duration_minutes),
        }
        result
    }
}

impl Display for TripSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TripSortKey::Recent => "Recent",
            TripSortKey::Co2 => "CO2",
            TripSortKey::Duration => "Duration",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TripSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recent" => Ok(TripSortKey::Recent),
            "co2" => Ok(TripSortKey::Co2),
            "duration" => Ok(TripSortKey::Duration),
            other => Err(format!(
                "unknown sort key '{other}', expected one of recent, co2, duration"
            )),
        }
    }
}
