//! ParkCharge+ 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `points`: 积分状态管理
//! - `components`: UI 组件层

mod components {
    pub mod bottom_nav;
    pub mod home;
    mod icons;
    pub mod not_found;
    pub mod notification;
    pub mod profile;
    pub mod rewards;
    pub mod splash;
    pub mod station_details;
    pub mod toast;
}
mod points;

use crate::components::bottom_nav::BottomNav;
use crate::components::home::HomePage;
use crate::components::not_found::NotFoundPage;
use crate::components::notification::NotificationPage;
use crate::components::profile::ProfilePage;
use crate::components::rewards::RewardsPage;
use crate::components::splash::SplashPage;
use crate::components::station_details::StationDetailsPage;
use crate::points::PointsContext;

use leptos::prelude::*;

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    pub mod timer;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件，带底部导航的页面在此统一附加导航栏。
fn route_matcher(route: AppRoute) -> AnyView {
    let with_nav = route.shows_bottom_nav();
    let page = match route {
        AppRoute::Splash => view! { <SplashPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::StationDetails(id) => view! { <StationDetailsPage id=id /> }.into_any(),
        AppRoute::Notification => view! { <NotificationPage /> }.into_any(),
        AppRoute::Rewards => view! { <RewardsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    if with_nav {
        view! {
            {page}
            <BottomNav />
        }
        .into_any()
    } else {
        page
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 积分状态：唯一跨页面共享的可变状态
    provide_context(PointsContext::new());

    view! {
        // 2. 路由器组件
        <Router>
            <main class="max-w-lg mx-auto">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
