//! 图标组件
//!
//! 线框图标（lucide 风格），通过封闭的 `IconKind` 枚举选择，
//! 不做运行时的动态组件分发。

use leptos::prelude::*;
use parkcharge_shared::{BadgeIcon, RewardIcon};

const CIRCLE_10: &str = "M2 12a10 10 0 1 0 20 0a10 10 0 1 0 -20 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Home,
    Trophy,
    User,
    MapPin,
    Navigation,
    Filter,
    Battery,
    Zap,
    ArrowLeft,
    ArrowRight,
    Clock,
    Star,
    TrendingUp,
    TrendingDown,
    CheckCircle,
    Gift,
    Award,
    Leaf,
    Target,
    Car,
    Settings,
}

impl IconKind {
    /// SVG path 数据（24x24 视口）
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            IconKind::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
                "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16",
                "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
                "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
                "M18 2H6v7a6 6 0 0 0 12 0V2Z",
            ],
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0 -8 0",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            ],
            IconKind::Navigation => &["M3 11l19-9-9 19-2-8-8-2z"],
            IconKind::Filter => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
            IconKind::Battery => &[
                "M4 7h12a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M22 11v2",
            ],
            IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconKind::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::Clock => &[CIRCLE_10, "M12 6v6l4 2"],
            IconKind::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            IconKind::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            IconKind::TrendingDown => &["m22 17-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
            IconKind::CheckCircle => &[CIRCLE_10, "m9 12 2 2 4-4"],
            IconKind::Gift => &[
                "M4 8h16a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V9a1 1 0 0 1 1-1z",
                "M12 8v13",
                "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7",
                "M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5",
            ],
            IconKind::Award => &[
                "M6 8a6 6 0 1 0 12 0a6 6 0 1 0 -12 0",
                "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
            ],
            IconKind::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            IconKind::Target => &[
                CIRCLE_10,
                "M6 12a6 6 0 1 0 12 0a6 6 0 1 0 -12 0",
                "M10 12a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
            ],
            IconKind::Car => &[
                "M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2",
                "M5 17a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
                "M9 17h6",
                "M15 17a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
            ],
            IconKind::Settings => &[
                "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z",
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            ],
        }
    }
}

impl From<RewardIcon> for IconKind {
    fn from(icon: RewardIcon) -> Self {
        match icon {
            RewardIcon::Gift => IconKind::Gift,
            RewardIcon::Zap => IconKind::Zap,
        }
    }
}

impl From<BadgeIcon> for IconKind {
    fn from(icon: BadgeIcon) -> Self {
        match icon {
            BadgeIcon::Leaf => IconKind::Leaf,
            BadgeIcon::Award => IconKind::Award,
            BadgeIcon::Zap => IconKind::Zap,
            BadgeIcon::Target => IconKind::Target,
        }
    }
}

/// 图标组件，样式通过 `attr:class` 传入
#[component]
pub fn Icon(#[prop(into)] kind: IconKind) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {kind.paths().iter().map(|&d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        let all = [
            IconKind::Home,
            IconKind::Trophy,
            IconKind::User,
            IconKind::MapPin,
            IconKind::Navigation,
            IconKind::Filter,
            IconKind::Battery,
            IconKind::Zap,
            IconKind::ArrowLeft,
            IconKind::ArrowRight,
            IconKind::Clock,
            IconKind::Star,
            IconKind::TrendingUp,
            IconKind::TrendingDown,
            IconKind::CheckCircle,
            IconKind::Gift,
            IconKind::Award,
            IconKind::Leaf,
            IconKind::Target,
            IconKind::Car,
            IconKind::Settings,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{:?} has no paths", icon);
        }
    }

    #[test]
    fn test_catalog_icons_map_to_fixed_kinds() {
        assert_eq!(IconKind::from(RewardIcon::Zap), IconKind::Zap);
        assert_eq!(IconKind::from(BadgeIcon::Leaf), IconKind::Leaf);
        assert_eq!(IconKind::from(BadgeIcon::Target), IconKind::Target);
    }
}
