//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

const STATION_PREFIX: &str = "/station/";

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 启动页 (默认路由)
    #[default]
    Splash,
    /// 附近充电站列表
    Home,
    /// 充电站详情，携带路径中解码后的 ID（不做存在性校验）
    StationDetails(String),
    /// 充电完成通知
    Notification,
    Rewards,
    Profile,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 末尾的单个 `/` 会被忽略，含空段（`//`）或无法识别的路径统一解析为 `NotFound`。
    /// 充电站 ID 段按 URL 百分号编码解码。
    pub fn from_path(path: &str) -> Self {
        if path.contains("//") {
            return Self::NotFound;
        }
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        match path {
            "/" | "/splash" => Self::Splash,
            "/home" => Self::Home,
            "/notification" => Self::Notification,
            "/rewards" => Self::Rewards,
            "/profile" => Self::Profile,
            _ => match path.strip_prefix(STATION_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    match urlencoding::decode(id) {
                        Ok(decoded) => Self::StationDetails(decoded.into_owned()),
                        // 解码结果不是合法 UTF-8
                        Err(_) => Self::NotFound,
                    }
                }
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Splash => "/".to_string(),
            Self::Home => "/home".to_string(),
            Self::StationDetails(id) => format!("{}{}", STATION_PREFIX, urlencoding::encode(id)),
            Self::Notification => "/notification".to_string(),
            Self::Rewards => "/rewards".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 该路由是否显示底部导航栏
    pub fn shows_bottom_nav(&self) -> bool {
        matches!(self, Self::Home | Self::Rewards | Self::Profile)
    }

    /// 后退无历史记录时的兜底目标
    pub fn back_fallback() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Splash);
        assert_eq!(AppRoute::from_path("/splash"), AppRoute::Splash);
        assert_eq!(AppRoute::from_path("/home"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/notification"), AppRoute::Notification);
        assert_eq!(AppRoute::from_path("/rewards"), AppRoute::Rewards);
        assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
    }

    #[test]
    fn test_station_path_carries_raw_id() {
        assert_eq!(
            AppRoute::from_path("/station/3"),
            AppRoute::StationDetails("3".to_string())
        );
        // ID 不做存在性校验
        assert_eq!(
            AppRoute::from_path("/station/does-not-exist"),
            AppRoute::StationDetails("does-not-exist".to_string())
        );
        assert_eq!(AppRoute::StationDetails("42".to_string()).to_path(), "/station/42");
    }

    #[test]
    fn test_malformed_station_paths_not_found() {
        assert_eq!(AppRoute::from_path("/station"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/station/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/station/1/extra"), AppRoute::NotFound);
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(AppRoute::from_path("/home/"), AppRoute::Home);
        assert_eq!(
            AppRoute::from_path("/station/7/"),
            AppRoute::StationDetails("7".to_string())
        );
    }

    #[test]
    fn test_station_id_is_percent_decoded() {
        assert_eq!(
            AppRoute::from_path("/station/a%20b"),
            AppRoute::StationDetails("a b".to_string())
        );
        // 编码后的 `/` 属于 ID 本身，不是路径分隔符
        assert_eq!(
            AppRoute::from_path("/station/a%2Fb"),
            AppRoute::StationDetails("a/b".to_string())
        );
        assert_eq!(AppRoute::from_path("/station/%FF"), AppRoute::NotFound);
        assert_eq!(
            AppRoute::StationDetails("a b".to_string()).to_path(),
            "/station/a%20b"
        );
    }

    #[test]
    fn test_empty_segments_not_found() {
        assert_eq!(AppRoute::from_path("//"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("//home"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/home//"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/station//3"), AppRoute::NotFound);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_not_found() {
        assert_eq!(AppRoute::from_path("/non-existent-page"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/HOME"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_round_trip_for_navigable_routes() {
        let routes = [
            AppRoute::Splash,
            AppRoute::Home,
            AppRoute::StationDetails("1".to_string()),
            AppRoute::StationDetails("bay 4/b".to_string()),
            AppRoute::Notification,
            AppRoute::Rewards,
            AppRoute::Profile,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_bottom_nav_visibility() {
        assert!(AppRoute::Home.shows_bottom_nav());
        assert!(AppRoute::Rewards.shows_bottom_nav());
        assert!(AppRoute::Profile.shows_bottom_nav());
        assert!(!AppRoute::Splash.shows_bottom_nav());
        assert!(!AppRoute::StationDetails("1".to_string()).shows_bottom_nav());
        assert!(!AppRoute::Notification.shows_bottom_nav());
    }
}
