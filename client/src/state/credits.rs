//! Last known credit balance.
//!
//! The ledger lives on the backend; this is only the most recent value any
//! response reported, shown in the nav bar and used to warn before a purchase.

#[cfg(test)]
#[path = "credits_test.rs"]
mod credits_test;

/// Credits charged when the assistant builds a full course.
pub const GENERATION_COST: i64 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreditsState {
    pub balance: Option<i64>,
}

impl CreditsState {
    /// Unknown balance is optimistic; the backend has the final word.
    pub fn can_afford(&self, price: i64) -> bool {
        price <= 0 || self.balance.is_none_or(|b| b >= price)
    }

    /// Shortfall for `price`, if the known balance is too low.
    pub fn shortfall(&self, price: i64) -> Option<i64> {
        let balance = self.balance?;
        (price > balance).then(|| price - balance)
    }
}
