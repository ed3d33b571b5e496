//! 启动页
//!
//! 显示品牌信息，`SPLASH_DELAY_MS` 后自动进入首页。
//! 定时器的生命周期与页面绑定：页面卸载时定时器随之清除。

use leptos::prelude::*;
use parkcharge_shared::{APP_NAME, SPLASH_DELAY_MS, TAGLINE};

use crate::components::icons::{Icon, IconKind};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::timer::{BrowserTimers, Timeout, TimerError, TimerHost};

/// 安排启动页的自动跳转
///
/// 定时器由当前 reactive owner 持有，owner 清理时一并清除。
pub fn schedule_auto_advance<H, F>(host: H, advance: F) -> Result<(), TimerError>
where
    H: TimerHost + 'static,
    H::Handle: 'static,
    F: FnOnce() + 'static,
{
    let timeout = Timeout::with_host(host, SPLASH_DELAY_MS, advance)?;
    let timeout = StoredValue::new_local(Some(timeout));
    on_cleanup(move || {
        timeout.update_value(|t| {
            t.take();
        });
    });
    Ok(())
}

#[component]
pub fn SplashPage() -> impl IntoView {
    let router = use_router();

    if let Err(e) = schedule_auto_advance(BrowserTimers, move || {
        router.navigate_to(AppRoute::Home)
    }) {
        web_sys::console::error_1(&format!("[Splash] {}. Skipping to home.", e).into());
        // 渲染完成后再跳转
        Effect::new(move |_| router.redirect_to(AppRoute::Home));
    }

    view! {
        <div class="min-h-screen bg-gradient-to-br from-primary via-secondary to-primary flex flex-col items-center justify-center p-6">
            <div class="relative">
                <div class="absolute inset-0 bg-success/20 blur-3xl rounded-full animate-pulse"></div>
                <div class="w-32 h-32 relative z-10 rounded-full bg-white/20 flex items-center justify-center drop-shadow-lg">
                    <Icon kind=IconKind::Zap attr:class="w-16 h-16 text-white" />
                </div>
            </div>

            <h1 class="text-5xl font-bold text-white mt-8 mb-2 tracking-tight">{APP_NAME}</h1>

            <p class="text-xl text-white/90 font-medium flex items-center gap-2">
                <Icon kind=IconKind::Zap attr:class="w-5 h-5" />
                {TAGLINE}
            </p>

            <div class="mt-12 flex gap-2">
                <div class="w-2 h-2 bg-white rounded-full animate-pulse" style="animation-delay: 0ms"></div>
                <div class="w-2 h-2 bg-white rounded-full animate-pulse" style="animation-delay: 200ms"></div>
                <div class="w-2 h-2 bg-white rounded-full animate-pulse" style="animation-delay: 400ms"></div>
            </div>
        </div>
    }
}
