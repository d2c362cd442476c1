use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// logical names of the whole-collection blobs kept in the key-value store
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StorageKey {
    RecentTrips,
    MyTrips,
    Rewards,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::RecentTrips => "recentTrips",
            StorageKey::MyTrips => "myTrips",
            StorageKey::Rewards => "rewardsData",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
