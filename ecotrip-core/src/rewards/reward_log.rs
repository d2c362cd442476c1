use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RewardLog {
    pub text: String,
    pub date: DateTime<Utc>,
}
