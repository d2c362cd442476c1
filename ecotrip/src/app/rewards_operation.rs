use super::{operation, AppError, EcoTripConfig};
use chrono::Utc;
use clap::Subcommand;
use ecotrip_core::rewards::{RedeemStatus, RewardsLedger, StoreItem};

#[derive(Debug, Clone, Subcommand)]
pub enum RewardsOperation {
    /// points, level, badges and the store catalog
    Show {
        /// number of log entries to show
        #[arg(long, default_value_t = 5)]
        logs: usize,
    },
    /// spend points on a store item, matched by name
    Redeem { item: String },
}

impl RewardsOperation {
    pub fn run(&self, conf: &EcoTripConfig) -> Result<String, AppError> {
        let mut ledger = RewardsLedger::load(operation::open_store(conf));
        match self {
            RewardsOperation::Show { logs } => Ok(render_ledger(&ledger, *logs)),
            RewardsOperation::Redeem { item } => {
                let found = StoreItem::find(item).ok_or_else(|| AppError::UnknownItem(item.clone()))?;
                match ledger.redeem(&found, Utc::now()) {
                    RedeemStatus::Redeemed(outcome) => Ok(format!(
                        "{} redeemed {}, {} points left{}",
                        found.icon,
                        found.name,
                        ledger.account().eco_points,
                        operation::outcome_note(outcome)
                    )),
                    RedeemStatus::InsufficientBalance { balance, cost } => {
                        Err(AppError::InsufficientBalance { balance, cost })
                    }
                }
            }
        }
    }
}

fn render_ledger(ledger: &RewardsLedger, n_logs: usize) -> String {
    let account = ledger.account();
    let level = ledger.level();
    let mut lines = vec![
        format!(
            "{} {level}: {} / {} points ({}%)",
            level.icon(),
            account.eco_points,
            level.next_cap(),
            ledger.level_progress_percent()
        ),
        format!("CO₂ saved: {:.1} kg", account.total_co2_saved_kg),
        String::from("badges:"),
    ];
    lines.extend(ledger.badges().iter().map(|b| {
        let mark = if b.is_unlocked() { "✓" } else { " " };
        format!(
            "  {mark} {} {:<13} {}/{} ({}%)",
            b.icon,
            b.name,
            b.display_progress(),
            b.target,
            b.progress_percent()
        )
    }));
    lines.push(String::from("store:"));
    lines.extend(
        StoreItem::catalog()
            .iter()
            .map(|i| format!("  {} {} ({} pts)", i.icon, i.name, i.cost)),
    );
    let logs = ledger.recent_logs(n_logs);
    if !logs.is_empty() {
        lines.push(String::from("history:"));
        lines.extend(
            logs.iter()
                .map(|l| format!("  {}  {}", l.date.format("%Y-%m-%d"), l.text)),
        );
    }
    lines.join("\n")
}
