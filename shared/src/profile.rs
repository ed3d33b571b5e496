//! 用户资料模型

use chrono::NaiveDate;

/// 进度条填充百分比，构造时截断到 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FillPercent(u8);

impl FillPercent {
    pub const fn new(percent: u8) -> Self {
        if percent > 100 { Self(100) } else { Self(percent) }
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// CSS 宽度值，如 "75%"
    pub fn css_width(&self) -> String {
        format!("{}%", self.0)
    }
}

/// 进度条配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Energy,
    Cost,
    Emissions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyStat {
    pub label: String,
    pub value: String,
    /// 固定的填充比例，与 `value` 无关
    pub fill: FillPercent,
    pub tone: StatTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub model: String,
    pub trim: String,
    pub year: u16,
}

impl Vehicle {
    /// 如 "Long Range • 2023"
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.trim, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStats {
    pub name: String,
    pub member_since: NaiveDate,
    pub vehicle: Vehicle,
    pub total_charges: u32,
    pub co2_saved_kg: u32,
    pub weekly: Vec<WeeklyStat>,
    pub preferences: Vec<Preference>,
}

impl ProfileStats {
    /// 头像占位文字：取每个单词首字母
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// 如 "Member since Jan 2024"
    pub fn member_since_label(&self) -> String {
        format!("Member since {}", self.member_since.format("%b %Y"))
    }
}
