//! 积分账本
//!
//! 积分余额的唯一来源，兑换判断都经过这里。

use crate::{RedeemError, Reward, STARTING_POINTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsLedger {
    balance: u32,
}

impl PointsLedger {
    pub const fn new(balance: u32) -> Self {
        Self { balance }
    }

    #[inline]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// 当且仅当 `reward.points <= balance` 时可兑换
    pub fn can_redeem(&self, reward: &Reward) -> bool {
        reward.points <= self.balance
    }

    /// 兑换奖励并扣除积分
    ///
    /// # Returns
    /// 兑换后的余额
    pub fn redeem(&mut self, reward: &Reward) -> Result<u32, RedeemError> {
        if !self.can_redeem(reward) {
            return Err(RedeemError::InsufficientPoints {
                cost: reward.points,
                balance: self.balance,
            });
        }
        self.balance -= reward.points;
        Ok(self.balance)
    }
}

impl Default for PointsLedger {
    fn default() -> Self {
        Self::new(STARTING_POINTS)
    }
}

#[cfg(test)]
mod tests;
