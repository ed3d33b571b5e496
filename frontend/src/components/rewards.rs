use leptos::prelude::*;
use parkcharge_shared::{Badge, Reward, fixtures};

use crate::components::icons::{Icon, IconKind};
use crate::components::toast::{Toast, ToastView};
use crate::points::use_points;

/// 兑换按钮样式：可兑换为实心按钮，否则为禁用的描边按钮
pub fn redeem_button_class(enabled: bool) -> &'static str {
    if enabled {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-outline btn-disabled"
    }
}

/// 徽章卡片样式：(卡片, 图标底色, 图标颜色)
pub fn badge_classes(unlocked: bool) -> (&'static str, &'static str, &'static str) {
    if unlocked {
        (
            "card p-4 bg-gradient-to-br from-success/10 to-primary/5",
            "bg-success/20",
            "text-success",
        )
    } else {
        ("card p-4 bg-base-100 opacity-50", "bg-base-200", "text-base-content/60")
    }
}

#[component]
pub fn RewardsPage() -> impl IntoView {
    let points = use_points();
    let rewards = fixtures::rewards();
    let badges = fixtures::badges();

    let toast = Toast::new();

    let handle_redeem = move |reward: Reward| match points.redeem(&reward) {
        Ok(remaining) => {
            web_sys::console::log_1(
                &format!("[Rewards] Redeemed '{}', {} left", reward.name, remaining).into(),
            );
            toast.show(format!("Redeemed {}", reward.name), false);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[Rewards] {}", e).into());
            toast.show(e.to_string(), true);
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 pb-20">
            <ToastView toast=toast />

            <div class="bg-base-100 shadow-sm p-6">
                <h1 class="text-2xl font-bold mb-2">"Your Rewards"</h1>

                <div class="card p-6 bg-gradient-to-br from-primary to-success mt-4">
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-white/80 text-sm mb-1">"GreenCharge Points"</p>
                            <p class="text-4xl font-bold text-white">{move || points.balance()}</p>
                        </div>
                        <div class="w-16 h-16 rounded-full bg-white/20 flex items-center justify-center">
                            <Icon kind=IconKind::Trophy attr:class="h-8 w-8 text-white" />
                        </div>
                    </div>
                </div>
            </div>

            <div class="p-4 space-y-6">
                <div>
                    <h2 class="text-lg font-bold mb-3">"Available Rewards"</h2>
                    <div class="space-y-3">
                        {rewards
                            .into_iter()
                            .map(|reward| view! { <RewardCard reward=reward on_redeem=handle_redeem /> })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h2 class="text-lg font-bold mb-3">"Your Badges"</h2>
                    <div class="grid grid-cols-2 gap-3">
                        {badges.into_iter().map(|badge| view! { <BadgeCard badge=badge /> }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RewardCard(reward: Reward, #[prop(into)] on_redeem: Callback<Reward>) -> impl IntoView {
    let points = use_points();
    let enabled = {
        let reward = reward.clone();
        Signal::derive(move || points.can_redeem(&reward))
    };
    let icon = IconKind::from(reward.icon);
    let name = reward.name.clone();
    let cost = format!("{} points", reward.points);

    view! {
        <div class="card bg-base-100 p-4">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center">
                        <Icon kind=icon attr:class="h-6 w-6 text-primary" />
                    </div>
                    <div>
                        <h3 class="font-semibold">{name}</h3>
                        <p class="text-sm text-base-content/70">{cost}</p>
                    </div>
                </div>
                <button
                    class=move || redeem_button_class(enabled.get())
                    disabled=move || !enabled.get()
                    on:click=move |_| {
                        if enabled.get_untracked() {
                            on_redeem.run(reward.clone());
                        }
                    }
                >
                    "Redeem"
                </button>
            </div>
        </div>
    }
}

#[component]
fn BadgeCard(badge: Badge) -> impl IntoView {
    let (card, icon_bg, icon_color) = badge_classes(badge.unlocked);
    let icon = IconKind::from(badge.icon);
    let unlocked = badge.unlocked;

    view! {
        <div class=card>
            <div class="flex flex-col items-center text-center gap-2">
                <div class=format!("w-16 h-16 rounded-full flex items-center justify-center {}", icon_bg)>
                    <Icon kind=icon attr:class=format!("h-8 w-8 {}", icon_color) />
                </div>
                <div>
                    <h3 class="font-semibold text-sm">{badge.name}</h3>
                    <p class="text-xs text-base-content/70 mt-1">{badge.description}</p>
                </div>
                <Show when=move || unlocked>
                    <span class="badge badge-primary text-xs">"Unlocked"</span>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkcharge_shared::PointsLedger;

    #[test]
    fn test_redeem_enabled_iff_affordable_at_fixture_balance() {
        let ledger = PointsLedger::default();
        let classes: Vec<(u32, &str)> = fixtures::rewards()
            .iter()
            .map(|r| (r.points, redeem_button_class(ledger.can_redeem(r))))
            .collect();
        assert_eq!(
            classes,
            vec![
                (50, "btn btn-sm btn-primary"),
                (150, "btn btn-sm btn-primary"),
                (200, "btn btn-sm btn-primary"),
                (500, "btn btn-sm btn-outline btn-disabled"),
            ]
        );
    }

    #[test]
    fn test_locked_badges_are_dimmed() {
        let (locked_card, _, _) = badge_classes(false);
        let (unlocked_card, _, unlocked_icon) = badge_classes(true);
        assert!(locked_card.contains("opacity-50"));
        assert!(!unlocked_card.contains("opacity-50"));
        assert_eq!(unlocked_icon, "text-success");
    }
}
