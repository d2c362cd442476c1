use crate::persistence::SaveOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedeemStatus {
    Redeemed(SaveOutcome),
    /// balance below the item cost. the account is unchanged.
    InsufficientBalance { balance: u32, cost: u32 },
}
