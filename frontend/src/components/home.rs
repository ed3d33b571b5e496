use leptos::prelude::*;
use parkcharge_shared::{ChargingStation, StationStatus, fixtures};

use crate::components::icons::{Icon, IconKind};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 按状态决定的行样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub icon_bg: &'static str,
    pub icon_color: &'static str,
    pub badge: &'static str,
    pub label: &'static str,
}

impl StatusStyle {
    pub fn for_status(status: StationStatus) -> Self {
        match status {
            StationStatus::Available => Self {
                icon_bg: "bg-success/10",
                icon_color: "text-success",
                badge: "badge badge-success",
                label: status.label(),
            },
            StationStatus::Occupied => Self {
                icon_bg: "bg-error/10",
                icon_color: "text-error",
                badge: "badge badge-error",
                label: status.label(),
            },
        }
    }
}

/// 列表中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub key: u32,
    pub name: String,
    pub distance: String,
    pub price: String,
    pub style: StatusStyle,
    pub target: AppRoute,
}

impl From<&ChargingStation> for StationRow {
    fn from(station: &ChargingStation) -> Self {
        Self {
            key: station.id.get(),
            name: station.name.clone(),
            distance: format!("{} away", station.distance),
            price: station.price.clone(),
            style: StatusStyle::for_status(station.status),
            target: AppRoute::StationDetails(station.id.to_string()),
        }
    }
}

/// 每个充电站对应一行，保持列表顺序
pub fn station_rows(stations: &[ChargingStation]) -> Vec<StationRow> {
    stations.iter().map(StationRow::from).collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();
    let rows = station_rows(&fixtures::nearby_stations());
    let nearby = format!("{} stations nearby", rows.len());

    view! {
        <div class="min-h-screen bg-base-200 pb-20">
            <div class="bg-base-100 shadow-sm p-4 flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"Find Charging"</h1>
                    <p class="text-sm text-base-content/70">{nearby}</p>
                </div>
                <button class="btn btn-outline btn-circle">
                    <Icon kind=IconKind::Filter attr:class="h-5 w-5" />
                </button>
            </div>

            // 地图占位
            <div class="relative h-64 bg-gradient-to-br from-success/20 via-secondary/20 to-primary/20 flex items-center justify-center">
                <div class="absolute inset-0 bg-base-200/40"></div>
                <Icon kind=IconKind::MapPin attr:class="h-16 w-16 text-primary relative z-10" />
                <p class="absolute bottom-4 text-sm text-base-content/70">"Interactive map view"</p>
            </div>

            <div class="p-4">
                <button class="btn w-full bg-gradient-to-r from-primary to-secondary text-primary-content border-none shadow-lg hover:opacity-90">
                    <Icon kind=IconKind::Navigation attr:class="mr-2 h-5 w-5" />
                    "Smart Route Suggestion"
                </button>
            </div>

            <div class="px-4 space-y-3">
                <For
                    each=move || rows.clone()
                    key=|row| row.key
                    children=move |row| {
                        let StationRow { name, distance, price, style, target, .. } = row;
                        view! {
                            <div
                                class="card bg-base-100 p-4 cursor-pointer hover:shadow-lg transition-shadow"
                                on:click=move |_| router.navigate_to(target.clone())
                            >
                                <div class="flex items-start justify-between">
                                    <div class="flex gap-3">
                                        <div class=format!("w-12 h-12 rounded-full flex items-center justify-center {}", style.icon_bg)>
                                            <Icon kind=IconKind::Battery attr:class=format!("h-6 w-6 {}", style.icon_color) />
                                        </div>
                                        <div>
                                            <h3 class="font-semibold">{name}</h3>
                                            <p class="text-sm text-base-content/70">{distance}</p>
                                            <span class=format!("{} mt-2", style.badge)>{style.label}</span>
                                        </div>
                                    </div>
                                    <div class="text-right">
                                        <p class="text-sm font-medium text-primary">{price}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_station_in_order() {
        let stations = fixtures::nearby_stations();
        let rows = station_rows(&stations);
        assert_eq!(rows.len(), stations.len());
        let keys: Vec<u32> = rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_badge_label_follows_status() {
        for (station, row) in fixtures::nearby_stations()
            .iter()
            .zip(station_rows(&fixtures::nearby_stations()))
        {
            match station.status {
                StationStatus::Available => assert_ne!(row.style.label, "Occupied"),
                StationStatus::Occupied => assert_ne!(row.style.label, "Available"),
            }
        }
    }

    #[test]
    fn test_status_styles_differ() {
        let available = StatusStyle::for_status(StationStatus::Available);
        let occupied = StatusStyle::for_status(StationStatus::Occupied);
        assert_eq!(available.icon_color, "text-success");
        assert_eq!(occupied.icon_color, "text-error");
        assert_ne!(available.badge, occupied.badge);
        assert_ne!(available.icon_bg, occupied.icon_bg);
    }

    #[test]
    fn test_row_targets_station_details() {
        let rows = station_rows(&fixtures::nearby_stations());
        assert_eq!(rows[2].target.to_path(), "/station/3");
        assert_eq!(rows[0].distance, "0.5 km away");
    }
}
