//! Points balance used to unlock anonymous messages and replies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Balance every new session starts with.
pub const INITIAL_POINTS: u32 = 1200;

/// Points deducted to reveal one locked message or reply.
pub const UNLOCK_COST: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointsError {
    #[error("insufficient points: {cost} needed, {balance} available")]
    Insufficient { cost: u32, balance: u32 },
}

/// The user's point balance.
///
/// The balance never goes negative: a spend that exceeds it is rejected and
/// leaves the balance untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    balance: u32,
}

impl Wallet {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn can_afford(
        &self,
        cost: u32,
    ) -> bool {
        self.balance >= cost
    }

    /// Deducts `cost` and returns the new balance.
    pub fn spend(
        &mut self,
        cost: u32,
    ) -> Result<u32, PointsError> {
        if !self.can_afford(cost) {
            return Err(PointsError::Insufficient {
                cost,
                balance: self.balance,
            });
        }
        self.balance -= cost;
        tracing::debug!(cost, balance = self.balance, "points spent");
        Ok(self.balance)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(INITIAL_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_wallet_has_initial_points() {
        assert_eq!(Wallet::default().balance(), 1200);
    }

    #[test]
    fn spend_deducts_cost() {
        let mut wallet = Wallet::default();

        assert_eq!(wallet.spend(UNLOCK_COST), Ok(1100));
        assert_eq!(wallet.balance(), 1100);
    }

    #[test]
    fn spend_exact_balance_reaches_zero() {
        let mut wallet = Wallet::new(100);

        assert_eq!(wallet.spend(100), Ok(0));
    }

    #[test]
    fn spend_rejects_when_balance_too_low() {
        let mut wallet = Wallet::new(99);

        assert_eq!(
            wallet.spend(UNLOCK_COST),
            Err(PointsError::Insufficient {
                cost: 100,
                balance: 99
            })
        );
        assert_eq!(wallet.balance(), 99);
    }
}
