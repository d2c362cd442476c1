use crate::model::{TravelMode, TripRecord};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripFilter {
    #[default]
    All,
    Mode(TravelMode),
}

impl TripFilter {
    pub fn matches(&self, trip: &TripRecord) -> bool {
        match self {
            TripFilter::All => true,
            TripFilter::Mode(mode) => trip.mode == *mode,
        }
    }
}

impl Display for TripFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripFilter::All => write!(f, "All"),
            TripFilter::Mode(mode) => write!(f, "{mode}"),
        }
    }
}

impl FromStr for TripFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TripFilter::All)
        } else {
            s.parse().map(TripFilter::Mode)
        }
    }
}
