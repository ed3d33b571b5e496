use leptos::prelude::*;
use parkcharge_shared::fixtures;

use crate::components::icons::{Icon, IconKind};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// "Track Rewards" 按钮目标
pub const TRACK_REWARDS_TARGET: AppRoute = AppRoute::Rewards;
/// "Back to Home" 按钮目标
pub const BACK_HOME_TARGET: AppRoute = AppRoute::Home;

/// 充电完成通知页，内容全部为固定数据
#[component]
pub fn NotificationPage() -> impl IntoView {
    let router = use_router();
    let summary = fixtures::charging_summary();

    let summary_items = [
        ("Duration", summary.duration, ""),
        ("Energy Added", summary.energy, ""),
        ("Cost", summary.cost, ""),
        ("CO₂ Saved", summary.co2_saved, "text-success"),
    ];

    view! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-6">
            <div class="card bg-base-100 w-full max-w-md p-8 text-center space-y-6">
                <div class="flex justify-center">
                    <div class="w-20 h-20 rounded-full bg-success/20 flex items-center justify-center">
                        <Icon kind=IconKind::CheckCircle attr:class="h-12 w-12 text-success" />
                    </div>
                </div>

                <div>
                    <h1 class="text-2xl font-bold mb-2">"Charging Complete!"</h1>
                    <p class="text-base-content/70">"Your vehicle is fully charged and ready to go"</p>
                </div>

                <div class="bg-gradient-to-r from-success/10 to-primary/10 rounded-lg p-4 border border-success/20">
                    <div class="flex items-center justify-center gap-2 mb-2">
                        <Icon kind=IconKind::Gift attr:class="h-5 w-5 text-success" />
                        <p class="font-semibold">"Reward Earned!"</p>
                    </div>
                    <p class="text-2xl font-bold text-success mb-1">
                        {format!("+{} Points", summary.points_earned)}
                    </p>
                    <p class="text-sm text-base-content/70">"Thank you for unplugging on time"</p>
                </div>

                <div class="space-y-3 pt-4">
                    <button
                        class="btn w-full h-12 bg-gradient-to-r from-primary to-success text-primary-content border-none hover:opacity-90"
                        on:click=move |_| router.navigate_to(TRACK_REWARDS_TARGET)
                    >
                        "Track Rewards"
                        <Icon kind=IconKind::ArrowRight attr:class="ml-2 h-5 w-5" />
                    </button>
                    <button
                        class="btn btn-outline w-full h-12"
                        on:click=move |_| router.navigate_to(BACK_HOME_TARGET)
                    >
                        "Back to Home"
                    </button>
                </div>

                <div class="pt-4 border-t border-base-300">
                    <p class="text-sm text-base-content/70 mb-2">"Charging Summary"</p>
                    <div class="grid grid-cols-2 gap-4 text-sm">
                        {summary_items
                            .into_iter()
                            .map(|(label, value, tone)| {
                                view! {
                                    <div>
                                        <p class="text-base-content/70">{label}</p>
                                        <p class=format!("font-semibold {}", tone)>{value}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onward_targets() {
        assert_eq!(TRACK_REWARDS_TARGET.to_path(), "/rewards");
        assert_eq!(BACK_HOME_TARGET.to_path(), "/home");
        // 通知页本身不显示底部导航，目标页都显示
        assert!(TRACK_REWARDS_TARGET.shows_bottom_nav());
        assert!(BACK_HOME_TARGET.shows_bottom_nav());
    }

    #[test]
    fn test_summary_points_are_static() {
        assert_eq!(fixtures::charging_summary().points_earned, 10);
    }
}
