//! 固定演示数据
//!
//! 每次调用都返回新的实例，由调用方独占。

use chrono::NaiveDate;

use crate::{
    Badge, BadgeIcon, ChargingStation, ChargingSummary, FillPercent, Preference, ProfileStats,
    Reward, RewardIcon, StatTone, StationDetails, StationId, StationStatus, Vehicle, WeeklyStat,
};

fn station(
    id: u32,
    name: &str,
    status: StationStatus,
    distance: &str,
    lat: f64,
    lng: f64,
) -> ChargingStation {
    ChargingStation {
        id: StationId::new(id),
        name: name.to_string(),
        status,
        distance: distance.to_string(),
        price: "€0.35/kWh".to_string(),
        lat,
        lng,
    }
}

/// 首页附近的充电站列表
pub fn nearby_stations() -> Vec<ChargingStation> {
    use StationStatus::*;
    vec![
        station(1, "Tesla Supercharger", Available, "0.5 km", 51.505, -0.09),
        station(2, "ChargePoint Station", Occupied, "1.2 km", 51.51, -0.1),
        station(3, "EVgo Fast Charger", Available, "2.3 km", 51.515, -0.08),
        station(4, "BP Pulse", Available, "3.1 km", 51.52, -0.12),
    ]
}

/// 充电站详情（不区分 ID，所有站点共用）
pub fn station_details() -> StationDetails {
    StationDetails {
        title: "Tesla Supercharger".to_string(),
        status: StationStatus::Available,
        rating: 4.8,
        charger_types: "Type 2, CHAdeMO".to_string(),
        power_kw: 150,
        address: "123 Green Street, City Center".to_string(),
        distance: "0.5 km".to_string(),
        prediction: "Expected to remain available for the next 2 hours based on usage patterns"
            .to_string(),
        off_peak_price: "€0.35/kWh".to_string(),
        peak_price: "€0.45/kWh".to_string(),
        off_peak_bonus: 15,
    }
}

pub fn charging_summary() -> ChargingSummary {
    ChargingSummary {
        duration: "2h 45m".to_string(),
        energy: "45 kWh".to_string(),
        cost: "€15.75".to_string(),
        co2_saved: "12 kg".to_string(),
        points_earned: 10,
    }
}

pub fn rewards() -> Vec<Reward> {
    let reward = |name: &str, points, icon| Reward {
        name: name.to_string(),
        points,
        icon,
    };
    vec![
        reward("1 Hour Free Parking", 50, RewardIcon::Gift),
        reward("EV Cleaning Kit", 150, RewardIcon::Gift),
        reward("€10 Charging Credit", 200, RewardIcon::Zap),
        reward("Premium Cable", 500, RewardIcon::Gift),
    ]
}

pub fn badges() -> Vec<Badge> {
    let badge = |name: &str, description: &str, icon, unlocked| Badge {
        name: name.to_string(),
        description: description.to_string(),
        icon,
        unlocked,
    };
    vec![
        badge("Eco Warrior", "Charged 50 times", BadgeIcon::Leaf, true),
        badge("Night Owl", "10 off-peak charges", BadgeIcon::Award, true),
        badge("Speed Demon", "Used fast charger 20 times", BadgeIcon::Zap, false),
        badge("Green Champion", "Saved 100kg CO₂", BadgeIcon::Target, false),
    ]
}

pub fn profile() -> ProfileStats {
    let weekly = |label: &str, value: &str, fill, tone| WeeklyStat {
        label: label.to_string(),
        value: value.to_string(),
        fill: FillPercent::new(fill),
        tone,
    };
    let preference = |label: &str, value: &str| Preference {
        label: label.to_string(),
        value: value.to_string(),
    };

    ProfileStats {
        name: "John Doe".to_string(),
        member_since: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        vehicle: Vehicle {
            model: "Tesla Model 3".to_string(),
            trim: "Long Range".to_string(),
            year: 2023,
        },
        total_charges: 127,
        co2_saved_kg: 342,
        weekly: vec![
            weekly("Energy Added", "156 kWh", 75, StatTone::Energy),
            weekly("Total Cost", "€54.60", 50, StatTone::Cost),
            weekly("CO₂ Emissions Saved", "42 kg", 80, StatTone::Emissions),
        ],
        preferences: vec![
            preference("Preferred Type", "Type 2, CCS"),
            preference("Max Distance", "5 km"),
            preference("Price Range", "€0.30 - €0.50/kWh"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_station_ids_unique() {
        let stations = nearby_stations();
        let ids: HashSet<_> = stations.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), stations.len());
        assert_eq!(stations.len(), 4);
    }

    #[test]
    fn test_only_second_station_occupied() {
        let occupied: Vec<u32> = nearby_stations()
            .iter()
            .filter(|s| !s.status.is_available())
            .map(|s| s.id.get())
            .collect();
        assert_eq!(occupied, vec![2]);
    }

    #[test]
    fn test_two_badges_unlocked() {
        let unlocked: Vec<String> = badges()
            .into_iter()
            .filter(|b| b.unlocked)
            .map(|b| b.name)
            .collect();
        assert_eq!(unlocked, vec!["Eco Warrior", "Night Owl"]);
    }
}
