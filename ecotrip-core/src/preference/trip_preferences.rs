use serde::{Deserialize, Serialize};

/// user-selected ordering preferences for planning results.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TripPreferences {
    pub fastest: bool,
    pub lowest_carbon: bool,
    pub cheapest: bool,
    /// kept with the other preferences but not used for ordering, traffic
    /// data is not available to the estimator.
    pub avoid_traffic: bool,
}

impl TripPreferences {
    /// the planner opens with "fastest" selected
    pub fn planner_default() -> TripPreferences {
        TripPreferences {
            fastest: true,
            ..Default::default()
        }
    }

    pub fn any_active(&self) -> bool {
        self.fastest || self.lowest_carbon || self.cheapest
    }
}
