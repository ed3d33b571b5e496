use leptos::prelude::*;
use parkcharge_shared::{StatTone, WeeklyStat, fixtures};

use crate::components::icons::{Icon, IconKind};

/// 进度条颜色
fn tone_class(tone: StatTone) -> &'static str {
    match tone {
        StatTone::Energy => "bg-gradient-to-r from-primary to-success",
        StatTone::Cost => "bg-gradient-to-r from-secondary to-primary",
        StatTone::Emissions => "bg-success",
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = fixtures::profile();
    let initials = profile.initials();
    let member_since = profile.member_since_label();
    let vehicle_subtitle = profile.vehicle.subtitle();

    view! {
        <div class="min-h-screen bg-base-200 pb-20">
            <div class="bg-base-100 shadow-sm p-6">
                <div class="flex items-center justify-between mb-4">
                    <h1 class="text-2xl font-bold">"Profile"</h1>
                    <button class="btn btn-ghost btn-square">
                        <Icon kind=IconKind::Settings attr:class="h-5 w-5" />
                    </button>
                </div>

                <div class="flex items-center gap-4">
                    <div class="avatar placeholder">
                        <div class="w-20 rounded-full bg-gradient-to-br from-primary to-secondary text-white">
                            <span class="text-2xl">{initials}</span>
                        </div>
                    </div>
                    <div>
                        <h2 class="text-xl font-bold">{profile.name}</h2>
                        <p class="text-sm text-base-content/70">{member_since}</p>
                    </div>
                </div>
            </div>

            <div class="p-4 space-y-4">
                <div class="card bg-base-100 p-4">
                    <div class="flex items-start gap-3">
                        <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center">
                            <Icon kind=IconKind::Car attr:class="h-6 w-6 text-primary" />
                        </div>
                        <div class="flex-1">
                            <h3 class="font-semibold mb-1">"Your Vehicle"</h3>
                            <p class="font-medium">{profile.vehicle.model}</p>
                            <p class="text-sm text-base-content/70">{vehicle_subtitle}</p>
                        </div>
                        <button class="btn btn-outline btn-sm">"Edit"</button>
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-3">
                    <div class="card bg-base-100 p-4 text-center">
                        <div class="w-12 h-12 rounded-full bg-success/10 flex items-center justify-center mx-auto mb-2">
                            <Icon kind=IconKind::Zap attr:class="h-6 w-6 text-success" />
                        </div>
                        <p class="text-2xl font-bold">{profile.total_charges}</p>
                        <p class="text-sm text-base-content/70">"Total Charges"</p>
                    </div>
                    <div class="card bg-base-100 p-4 text-center">
                        <div class="w-12 h-12 rounded-full bg-secondary/10 flex items-center justify-center mx-auto mb-2">
                            <Icon kind=IconKind::TrendingDown attr:class="h-6 w-6 text-secondary" />
                        </div>
                        <p class="text-2xl font-bold">{profile.co2_saved_kg}</p>
                        <p class="text-sm text-base-content/70">"kg CO₂ Saved"</p>
                    </div>
                </div>

                <div class="card bg-base-100 p-6">
                    <h3 class="font-semibold mb-4">"This Week"</h3>
                    <div class="space-y-4">
                        {profile.weekly.into_iter().map(|stat| view! { <WeeklyBar stat=stat /> }).collect_view()}
                    </div>
                </div>

                <div class="card bg-base-100 p-4">
                    <h3 class="font-semibold mb-3">"Charger Preferences"</h3>
                    <div class="space-y-2 text-sm">
                        {profile
                            .preferences
                            .into_iter()
                            .map(|pref| {
                                view! {
                                    <div class="flex justify-between">
                                        <span class="text-base-content/70">{pref.label}</span>
                                        <span class="font-medium">{pref.value}</span>
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

#[component]
fn WeeklyBar(stat: WeeklyStat) -> impl IntoView {
    let value_class = if stat.tone == StatTone::Emissions {
        "font-semibold text-success"
    } else {
        "font-semibold"
    };
    let fill_class = format!("h-full {}", tone_class(stat.tone));
    let fill_style = format!("width: {}", stat.fill.css_width());

    view! {
        <div>
            <div class="flex justify-between text-sm mb-2">
                <span class="text-base-content/70">{stat.label}</span>
                <span class=value_class>{stat.value}</span>
            </div>
            <div class="h-2 bg-base-200 rounded-full overflow-hidden">
                <div class=fill_class style=fill_style></div>
            </div>
        </div>
    }
}
