use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum EcoLevel {
    EcoStarter,
    GreenTraveller,
    PlanetGuardian,
}

impl EcoLevel {
    pub fn from_points(points: u32) -> EcoLevel {
        match points {
            p if p >= 2000 => EcoLevel::PlanetGuardian,
            p if p >= 1000 => EcoLevel::GreenTraveller,
            _ => EcoLevel::EcoStarter,
        }
    }

    /// the point total shown as the end of the progress bar
    pub fn next_cap(&self) -> u32 {
        match self {
            EcoLevel::EcoStarter => 1000,
            EcoLevel::GreenTraveller => 2000,
            EcoLevel::PlanetGuardian => 3000,
        }
    }

    /// progress bar fill for `points`: (points mod cap) / cap, as a rounded percent
    pub fn progress_percent(points: u32) -> u8 {
        let cap = EcoLevel::from_points(points).next_cap();
        let pct = (points % cap) as f64 / cap as f64 * 100.0;
        pct.round().min(100.0) as u8
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EcoLevel::EcoStarter => "🌱",
            EcoLevel::GreenTraveller => "🌍",
            EcoLevel::PlanetGuardian => "🌎",
        }
    }
}

impl Display for EcoLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EcoLevel::EcoStarter => "Eco Starter",
            EcoLevel::GreenTraveller => "Green Traveller",
            EcoLevel::PlanetGuardian => "Planet Guardian",
        };
        write!(f, "{}", s)
    }
}
