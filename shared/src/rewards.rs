#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardIcon {
    Gift,
    Zap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub name: String,
    /// 兑换所需积分
    pub points: u32,
    pub icon: RewardIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeIcon {
    Leaf,
    Award,
    Zap,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub name: String,
    pub description: String,
    pub icon: BadgeIcon,
    pub unlocked: bool,
}

/// 充电完成后的会话摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargingSummary {
    pub duration: String,
    pub energy: String,
    pub cost: String,
    pub co2_saved: String,
    /// 本次获得的积分，固定值
    pub points_earned: u32,
}
