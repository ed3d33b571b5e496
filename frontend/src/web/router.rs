//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 导航是"发出即成功"的：目标路径只做解析，不做校验。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(history) = history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            web_sys::console::error_1(&format!("[Router] pushState failed: {:?}", e).into());
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(history) = history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
            web_sys::console::error_1(&format!("[Router] replaceState failed: {:?}", e).into());
        }
    }
}

/// 当前会话是否有可以后退的记录
fn can_go_back() -> bool {
    history()
        .and_then(|h| h.length().ok())
        .is_some_and(|len| len > 1)
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    /// 创建新的路由服务，初始路由从 URL 解析
    fn new() -> Self {
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 按路径导航（pushState）
    pub fn navigate(&self, path: &str) {
        self.navigate_to(AppRoute::from_path(path));
    }

    /// 导航到指定路由（pushState）
    pub fn navigate_to(&self, route: AppRoute) {
        web_sys::console::log_1(&format!("[Router] -> {}", route).into());
        push_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 重定向到指定路由（replaceState，不产生新的历史记录）
    pub fn redirect_to(&self, route: AppRoute) {
        web_sys::console::log_1(&format!("[Router] Redirect -> {}", route).into());
        replace_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 后退一步
    ///
    /// 路由更新由 popstate 监听完成；直接打开的页面没有历史记录，此时回到首页。
    pub fn back(&self) {
        match history() {
            Some(history) if can_go_back() => {
                if let Err(e) = history.back() {
                    web_sys::console::error_1(&format!("[Router] back failed: {:?}", e).into());
                    self.redirect_to(AppRoute::back_fallback());
                }
            }
            _ => self.redirect_to(AppRoute::back_fallback()),
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            web_sys::console::log_1(&format!("[Router] popstate -> {}", target_route).into());
            set_route.set(target_route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
