//! 积分状态模块
//!
//! 积分余额是唯一跨页面共享的可变状态，集中在此 Context 中，
//! 页面只通过 `balance` / `redeem` 读写。

use leptos::prelude::*;
use parkcharge_shared::{PointsLedger, RedeemError, Reward};

/// 积分上下文
#[derive(Clone, Copy)]
pub struct PointsContext {
    ledger: RwSignal<PointsLedger>,
}

impl PointsContext {
    pub fn new() -> Self {
        Self {
            ledger: RwSignal::new(PointsLedger::default()),
        }
    }

    /// 当前余额（响应式读取）
    pub fn balance(&self) -> u32 {
        self.ledger.with(|l| l.balance())
    }

    /// 奖励当前是否可兑换（响应式读取）
    pub fn can_redeem(&self, reward: &Reward) -> bool {
        self.ledger.with(|l| l.can_redeem(reward))
    }

    /// 兑换奖励，成功时返回剩余余额
    pub fn redeem(&self, reward: &Reward) -> Result<u32, RedeemError> {
        let mut ledger = self.ledger.get_untracked();
        let remaining = ledger.redeem(reward)?;
        self.ledger.set(ledger);
        Ok(remaining)
    }
}

impl Default for PointsContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取积分上下文
pub fn use_points() -> PointsContext {
    use_context::<PointsContext>().expect("PointsContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkcharge_shared::fixtures;

    #[test]
    fn test_redeem_through_context_updates_balance() {
        let owner = Owner::new();
        owner.with(|| {
            let points = PointsContext::new();
            let rewards = fixtures::rewards();
            assert_eq!(points.balance(), 285);

            assert_eq!(points.redeem(&rewards[1]), Ok(135));
            assert_eq!(points.balance(), 135);
            assert!(!points.can_redeem(&rewards[2]));
        });
    }

    #[test]
    fn test_failed_redeem_keeps_balance() {
        let owner = Owner::new();
        owner.with(|| {
            let points = PointsContext::new();
            let rewards = fixtures::rewards();
            assert!(points.redeem(&rewards[3]).is_err());
            assert_eq!(points.balance(), 285);
        });
    }
}
