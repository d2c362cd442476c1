mod badge;
mod eco_level;
mod redeem_status;
mod reward_log;
mod rewards_account;
mod rewards_ledger;
mod store_item;

pub use badge::Badge;
pub use eco_level::EcoLevel;
pub use redeem_status::RedeemStatus;
pub use reward_log::RewardLog;
pub use rewards_account::RewardsAccount;
pub use rewards_ledger::RewardsLedger;
pub use store_item::StoreItem;
