//! 充电站模型

use std::fmt;

/// 充电站 ID（列表内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u32);

impl StationId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationStatus {
    Available,
    Occupied,
}

impl StationStatus {
    /// 状态徽章上显示的文字
    pub fn label(&self) -> &'static str {
        match self {
            StationStatus::Available => "Available",
            StationStatus::Occupied => "Occupied",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, StationStatus::Available)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargingStation {
    pub id: StationId,
    pub name: String,
    pub status: StationStatus,
    /// 距离标签，如 "0.5 km"
    pub distance: String,
    /// 价格标签，如 "€0.35/kWh"
    pub price: String,
    // 坐标仅用于展示
    pub lat: f64,
    pub lng: f64,
}

/// 充电站详情页展示的固定信息
#[derive(Debug, Clone, PartialEq)]
pub struct StationDetails {
    pub title: String,
    pub status: StationStatus,
    pub rating: f32,
    pub charger_types: String,
    pub power_kw: u32,
    pub address: String,
    pub distance: String,
    pub prediction: String,
    pub off_peak_price: String,
    pub peak_price: String,
    /// 非高峰时段充电奖励积分（固定值，不根据时间计算）
    pub off_peak_bonus: u32,
}
