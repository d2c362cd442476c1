use super::{Badge, RewardLog};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardsAccount {
    pub eco_points: u32,
    #[serde(rename = "totalCO2Saved")]
    pub total_co2_saved_kg: f64,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default, rename = "redeemed")]
    pub redeemed_items: Vec<String>,
    /// newest first
    #[serde(default)]
    pub logs: Vec<RewardLog>,
}

impl Default for RewardsAccount {
    fn default() -> Self {
        Self {
            eco_points: 860,
            total_co2_saved_kg: 12.4,
            badges: Badge::defaults(),
            redeemed_items: vec![],
            logs: vec![],
        }
    }
}
