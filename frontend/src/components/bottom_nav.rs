use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 底部导航目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

pub const NAV_TABS: [NavTab; 3] = [
    NavTab {
        path: "/home",
        label: "Home",
        icon: IconKind::Home,
    },
    NavTab {
        path: "/rewards",
        label: "Rewards",
        icon: IconKind::Trophy,
    },
    NavTab {
        path: "/profile",
        label: "Profile",
        icon: IconKind::User,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub tab: NavTab,
    pub active: bool,
}

/// 计算每个标签的高亮状态：路径与当前路由路径相同即为激活
pub fn tab_states(current: &AppRoute) -> [TabState; 3] {
    let current_path = current.to_path();
    NAV_TABS.map(|tab| TabState {
        tab,
        active: tab.path == current_path,
    })
}

#[component]
pub fn BottomNav() -> impl IntoView {
    let router = use_router();

    view! {
        <nav class="btm-nav fixed bottom-0 left-0 right-0 bg-base-100 border-t border-base-300 shadow-lg">
            <div class="flex items-center justify-around h-16 max-w-lg mx-auto w-full">
                {move || {
                    let route = router.current_route().get();
                    tab_states(&route)
                        .into_iter()
                        .map(|TabState { tab, active }| {
                            let (tone, icon_class) = if active {
                                ("text-primary", "h-6 w-6 scale-110 transition-transform")
                            } else {
                                ("text-base-content/60", "h-6 w-6 transition-transform")
                            };
                            let button_class = format!(
                                "flex flex-col items-center justify-center gap-1 px-4 py-2 transition-colors {}",
                                tone
                            );
                            let aria_current = active.then_some("page");
                            view! {
                                <button
                                    on:click=move |_| router.navigate(tab.path)
                                    class=button_class
                                    aria-current=aria_current
                                >
                                    <Icon kind=tab.icon attr:class=icon_class />
                                    <span class="text-xs font-medium">{tab.label}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(route: AppRoute) -> Vec<&'static str> {
        tab_states(&route)
            .iter()
            .filter(|s| s.active)
            .map(|s| s.tab.label)
            .collect()
    }

    #[test]
    fn test_exactly_one_tab_active_on_tab_routes() {
        assert_eq!(active_labels(AppRoute::Home), vec!["Home"]);
        assert_eq!(active_labels(AppRoute::Rewards), vec!["Rewards"]);
        assert_eq!(active_labels(AppRoute::Profile), vec!["Profile"]);
    }

    #[test]
    fn test_no_tab_active_elsewhere() {
        for route in [
            AppRoute::Splash,
            AppRoute::StationDetails("1".to_string()),
            AppRoute::Notification,
            AppRoute::NotFound,
        ] {
            assert!(active_labels(route).is_empty());
        }
    }

    #[test]
    fn test_tab_order_is_fixed() {
        let labels: Vec<_> = NAV_TABS.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Home", "Rewards", "Profile"]);
        for tab in NAV_TABS {
            assert!(AppRoute::from_path(tab.path).shows_bottom_nav());
        }
    }
}
