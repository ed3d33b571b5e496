//! 充电站详情页
//!
//! 路由中的 ID 只作为标签回显，不用于查找，所有 ID 展示同一份详情。

use leptos::prelude::*;
use parkcharge_shared::{StationDetails, StationStatus, fixtures};

use crate::components::home::StatusStyle;
use crate::components::icons::{Icon, IconKind};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 获取指定 ID 的详情（当前与 ID 无关）
pub fn details_for(_id: &str) -> StationDetails {
    fixtures::station_details()
}

pub fn station_label(id: &str) -> String {
    format!("Station #{}", id)
}

/// 预约后进入充电完成通知
pub const RESERVE_TARGET: AppRoute = AppRoute::Notification;

/// 状态徽章：(样式, 文案)，样式与首页列表一致
pub fn status_badge(status: StationStatus) -> (&'static str, &'static str) {
    let label = if status.is_available() {
        "Available Now"
    } else {
        "Occupied"
    };
    (StatusStyle::for_status(status).badge, label)
}

#[component]
pub fn StationDetailsPage(#[prop(into)] id: String) -> impl IntoView {
    let router = use_router();
    let details = details_for(&id);
    let label = station_label(&id);
    let (badge_class, badge_label) = status_badge(details.status);

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="bg-base-100 shadow-sm p-4 flex items-center gap-4">
                <button class="btn btn-ghost btn-square" on:click=move |_| router.back()>
                    <Icon kind=IconKind::ArrowLeft attr:class="h-5 w-5" />
                </button>
                <div>
                    <h1 class="text-xl font-bold">{details.title.clone()}</h1>
                    <p class="text-sm text-base-content/70">{label}</p>
                </div>
            </div>

            <div class="p-4 space-y-4">
                <div class="card p-6 bg-gradient-to-br from-success/10 to-primary/5">
                    <div class="flex items-center justify-between mb-4">
                        <span class=badge_class>{badge_label}</span>
                        <div class="flex items-center gap-1 text-warning">
                            <Icon kind=IconKind::Star attr:class="h-4 w-4 fill-current" />
                            <span class="text-sm font-semibold">{format!("{:.1}", details.rating)}</span>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <p class="text-sm text-base-content/70 mb-1">"Charger Type"</p>
                            <div class="flex items-center gap-2">
                                <Icon kind=IconKind::Zap attr:class="h-5 w-5 text-primary" />
                                <span class="font-semibold">{details.charger_types.clone()}</span>
                            </div>
                        </div>
                        <div>
                            <p class="text-sm text-base-content/70 mb-1">"Power Output"</p>
                            <p class="font-semibold">{format!("{} kW", details.power_kw)}</p>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 p-4">
                    <div class="flex items-start gap-3">
                        <Icon kind=IconKind::MapPin attr:class="h-5 w-5 text-primary mt-0.5" />
                        <div>
                            <h3 class="font-semibold mb-1">"Location"</h3>
                            <p class="text-sm text-base-content/70">{details.address.clone()}</p>
                            <p class="text-sm text-primary mt-1">{format!("{} away", details.distance)}</p>
                        </div>
                    </div>
                </div>

                <div class="card p-4 bg-gradient-to-br from-secondary/10 to-primary/5">
                    <div class="flex items-start gap-3">
                        <div class="w-10 h-10 rounded-full bg-secondary/20 flex items-center justify-center">
                            <Icon kind=IconKind::TrendingUp attr:class="h-5 w-5 text-secondary" />
                        </div>
                        <div>
                            <h3 class="font-semibold mb-1 flex items-center gap-2">
                                "Smart Prediction"
                                <span class="badge badge-secondary badge-sm">"AI"</span>
                            </h3>
                            <p class="text-sm text-base-content/70">{details.prediction.clone()}</p>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 p-4">
                    <div class="flex items-start gap-3 mb-4">
                        <Icon kind=IconKind::Clock attr:class="h-5 w-5 text-primary mt-0.5" />
                        <div class="flex-1">
                            <h3 class="font-semibold mb-1">"Pricing"</h3>
                            <p class="text-2xl font-bold text-primary mb-1">{details.off_peak_price.clone()}</p>
                            <p class="text-sm text-base-content/70">{format!("Peak hours: {}", details.peak_price)}</p>
                        </div>
                    </div>

                    <div class="bg-warning/10 rounded-lg p-3 border border-warning/20">
                        <p class="text-sm font-semibold text-warning mb-1">"🎁 Off-Peak Bonus"</p>
                        <p class="text-sm text-base-content/70">
                            {format!(
                                "Earn {} GreenCharge points for charging during off-peak hours!",
                                details.off_peak_bonus,
                            )}
                        </p>
                    </div>
                </div>

                <button
                    class="btn w-full h-14 text-lg font-semibold bg-gradient-to-r from-primary to-success text-primary-content border-none shadow-lg hover:opacity-90"
                    on:click=move |_| router.navigate_to(RESERVE_TARGET)
                >
                    "Reserve This Station"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_id_renders_same_details() {
        let first = details_for("1");
        assert_eq!(first, details_for("4"));
        assert_eq!(first, details_for("999"));
        assert_eq!(first, details_for("not-a-number"));
        assert_eq!(first.title, "Tesla Supercharger");
    }

    #[test]
    fn test_id_is_echoed_in_label() {
        assert_eq!(station_label("2"), "Station #2");
        assert_eq!(station_label("abc"), "Station #abc");
    }

    #[test]
    fn test_status_badge_follows_status() {
        assert_eq!(
            status_badge(StationStatus::Available),
            ("badge badge-success", "Available Now")
        );
        assert_eq!(
            status_badge(StationStatus::Occupied),
            ("badge badge-error", "Occupied")
        );
    }

    #[test]
    fn test_reserve_leads_to_notification() {
        assert_eq!(RESERVE_TARGET.to_path(), "/notification");
    }

    #[test]
    fn test_off_peak_bonus_is_flat() {
        assert_eq!(details_for("1").off_peak_bonus, 15);
    }
}
