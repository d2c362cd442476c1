use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Badge {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub icon: String,
    pub target: f64,
    pub progress: f64,
    /// last known unlocked state. may lag behind the progress, see [`Badge::is_unlocked`]
    #[serde(default)]
    pub unlocked: bool,
}

impl Badge {
    pub fn new(name: &str, description: &str, icon: &str, target: f64, progress: f64) -> Badge {
        Badge {
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            target,
            progress,
            unlocked: false,
        }
    }

    /// round(min(100, 100 * progress / target)), never negative
    pub fn progress_percent(&self) -> u8 {
        if self.target <= 0.0 {
            return 100;
        }
        (100.0 * self.progress / self.target).clamp(0.0, 100.0).round() as u8
    }

    /// the stored flag OR a full progress bar. a stored unlock is never revoked.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked || self.progress_percent() >= 100
    }

    /// progress shown next to the target, capped at the target
    pub fn display_progress(&self) -> f64 {
        self.progress.min(self.target)
    }

    pub fn defaults() -> Vec<Badge> {
        vec![
            Badge::new("Walk Hero", "5 walking trips", "👣", 5.0, 3.0),
            Badge::new("Bike Saver", "10 bike trips", "🚲", 10.0, 8.0),
            Badge::new("Transit Star", "20 transit trips", "🚌", 20.0, 12.0),
            Badge::new("Eco Warrior", "1000 kg CO₂ saved", "🌍", 1000.0, 12.4),
            Badge::new("Explorer", "10 new destinations", "🗺️", 10.0, 4.0),
        ]
    }
}
