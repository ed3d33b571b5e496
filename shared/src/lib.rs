//! ParkCharge+ 共享领域模型
//!
//! 不依赖 DOM，可在宿主机上直接测试。

mod error;
pub mod fixtures;
mod ledger;
mod profile;
mod rewards;
mod station;

pub use error::RedeemError;
pub use ledger::PointsLedger;
pub use profile::{FillPercent, Preference, ProfileStats, StatTone, Vehicle, WeeklyStat};
pub use rewards::{Badge, BadgeIcon, ChargingSummary, Reward, RewardIcon};
pub use station::{ChargingStation, StationDetails, StationId, StationStatus};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const APP_NAME: &str = "ParkCharge+";
pub const TAGLINE: &str = "Charge Smart. Park Smarter.";

/// 启动页自动跳转延迟（毫秒）
pub const SPLASH_DELAY_MS: u32 = 2500;

/// 初始积分余额
pub const STARTING_POINTS: u32 = 285;

/// 提示框自动消失时间（毫秒）
pub const TOAST_MS: u32 = 3000;
