use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the five travel modes compared for every trip. the declaration order is
/// the fixed enumeration order Walk < Cycle < Transit < Car < Carpool, which
/// is used both for result ordering and for tie-breaking.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TravelMode {
    Walk,
    Cycle,
    Transit,
    Car,
    Carpool,
}

impl TravelMode {
    pub const ALL: [TravelMode; 5] = [
        TravelMode::Walk,
        TravelMode::Cycle,
        TravelMode::Transit,
        TravelMode::Car,
        TravelMode::Carpool,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            TravelMode::Walk => "🚶",
            TravelMode::Cycle => "🚲",
            TravelMode::Transit => "🚌",
            TravelMode::Car => "🚗",
            TravelMode::Carpool => "🚘",
        }
    }

    /// true for the modes whose duration may come from an external route provider
    pub fn is_motorized(&self) -> bool {
        matches!(
            self,
            TravelMode::Transit | TravelMode::Car | TravelMode::Carpool
        )
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TravelMode::Walk => "Walk",
            TravelMode::Cycle => "Cycle",
            TravelMode::Transit => "Transit",
            TravelMode::Car => "Car",
            TravelMode::Carpool => "Carpool",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walk" => Ok(TravelMode::Walk),
            "cycle" | "bike" => Ok(TravelMode::Cycle),
            "transit" => Ok(TravelMode::Transit),
            "car" => Ok(TravelMode::Car),
            "carpool" => Ok(TravelMode::Carpool),
            other => Err(format!(
                "unknown travel mode '{other}', expected one of walk, cycle, transit, car, carpool"
            )),
        }
    }
}
