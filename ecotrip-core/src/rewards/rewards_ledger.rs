use super::{Badge, EcoLevel, RedeemStatus, RewardLog, RewardsAccount, StoreItem};
use crate::persistence::{persistence_ops, KeyValueStore, SaveOutcome, StorageKey};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// point balance, badge progress and redemption history of the user.
pub struct RewardsLedger {
    store: Arc<dyn KeyValueStore>,
    account: RewardsAccount,
}

impl RewardsLedger {
    /// number of log entries retained, newest first
    pub const LOG_LIMIT: usize = 10;

    /// loads the account from `store`, falling back to the starting account
    /// when nothing is stored or the stored value cannot be read.
    pub fn load(store: Arc<dyn KeyValueStore>) -> RewardsLedger {
        let account = persistence_ops::load_json(store.as_ref(), StorageKey::Rewards)
            .unwrap_or_else(|e| {
                log::warn!("starting from the default rewards account: {e}");
                None
            })
            .unwrap_or_default();
        let mut ledger = RewardsLedger { store, account };
        ledger.latch_unlocked_badges();
        ledger
    }

    pub fn account(&self) -> &RewardsAccount {
        &self.account
    }

    pub fn level(&self) -> EcoLevel {
        EcoLevel::from_points(self.account.eco_points)
    }

    pub fn level_progress_percent(&self) -> u8 {
        EcoLevel::progress_percent(self.account.eco_points)
    }

    pub fn badges(&self) -> &[Badge] {
        &self.account.badges
    }

    /// the newest `n` log entries
    pub fn recent_logs(&self, n: usize) -> &[RewardLog] {
        let end = n.min(self.account.logs.len());
        &self.account.logs[..end]
    }

    /// spends points on `item`. with too few points nothing changes; on
    /// success the points are debited, the item is appended to the redeemed
    /// list and a log entry is prepended, all in one update.
    pub fn redeem(&mut self, item: &StoreItem, now: DateTime<Utc>) -> RedeemStatus {
        let balance = self.account.eco_points;
        let Some(remaining) = balance.checked_sub(item.cost) else {
            log::debug!(
                "rejecting redemption of '{}': {} < {}",
                item.name,
                balance,
                item.cost
            );
            return RedeemStatus::InsufficientBalance {
                balance,
                cost: item.cost,
            };
        };
        let entry = RewardLog {
            text: format!("Redeemed: {} (-{} pts)", item.name, item.cost),
            date: now,
        };
        let mut next = self.account.clone();
        next.eco_points = remaining;
        next.redeemed_items.push(item.name.clone());
        next.logs = std::iter::once(entry)
            .chain(self.account.logs.iter().cloned())
            .take(Self::LOG_LIMIT)
            .collect();
        RedeemStatus::Redeemed(self.commit(next))
    }

    /// explicit data reset back to the starting account
    pub fn reset(&mut self) -> SaveOutcome {
        self.commit(RewardsAccount::default())
    }

    /// sets the stored unlocked flag of every badge whose progress reached
    /// its target. flags are only ever raised here, never cleared.
    fn latch_unlocked_badges(&mut self) {
        for badge in self.account.badges.iter_mut() {
            if !badge.unlocked && badge.is_unlocked() {
                log::debug!("badge '{}' unlocked", badge.name);
                badge.unlocked = true;
            }
        }
    }

    fn commit(&mut self, next: RewardsAccount) -> SaveOutcome {
        let outcome = persistence_ops::save_json(self.store.as_ref(), StorageKey::Rewards, &next);
        self.account = next;
        self.latch_unlocked_badges();
        outcome
    }
}
