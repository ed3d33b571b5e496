use std::fmt;

/// 积分兑换错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedeemError {
    /// 余额不足以支付奖励
    InsufficientPoints { cost: u32, balance: u32 },
}

impl fmt::Display for RedeemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedeemError::InsufficientPoints { cost, balance } => write!(
                f,
                "Not enough points: {} needed, {} available",
                cost, balance
            ),
        }
    }
}

impl std::error::Error for RedeemError {}
