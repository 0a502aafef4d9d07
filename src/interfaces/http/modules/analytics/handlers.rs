//! Analytics API handlers
//!
//! Read-only aggregation endpoints over the fleet. All endpoints query the
//! entities directly and aggregate in memory; fleets are small enough that
//! this stays well below any interesting data volume.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use sea_orm::EntityTrait;

use super::super::AppState;
use super::dto::*;
use crate::domain::status_token;
use crate::infrastructure::database::entities::{brand, vehicle, vehicle_model, vehicle_status};
use crate::interfaces::http::common::ApiResponse;

/// Running average that ignores absent values, like SQL `AVG`.
#[derive(Default)]
struct Avg {
    sum: f64,
    n: u64,
}

impl Avg {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.n += 1;
    }

    fn value(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum / self.n as f64
        }
    }
}

fn powertrain_label(p: &vehicle_model::Powertrain) -> &'static str {
    match p {
        vehicle_model::Powertrain::Bev => "BEV",
        vehicle_model::Powertrain::Ice => "ICE",
    }
}

async fn load_fleet(
    db: &sea_orm::DatabaseConnection,
) -> (
    Vec<vehicle::Model>,
    HashMap<String, vehicle_status::Model>,
    HashMap<String, vehicle_model::Model>,
) {
    let vehicles = vehicle::Entity::find().all(db).await.unwrap_or_default();

    let statuses: HashMap<String, vehicle_status::Model> = vehicle_status::Entity::find()
        .all(db)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|s| (s.vehicle_id.clone(), s))
        .collect();

    let models: HashMap<String, vehicle_model::Model> = vehicle_model::Entity::find()
        .all(db)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|m| (m.id.clone(), m))
        .collect();

    (vehicles, statuses, models)
}

// ── 1. Per-brand averages ──────────────────────────────────────

/// Average charge, consumption and battery capacity per brand.
pub async fn brand_analytics(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<BrandAnalyticsEntry>>> {
    let db = &state.db;
    let (vehicles, statuses, models) = load_fleet(db).await;

    let brands: HashMap<String, String> = brand::Entity::find()
        .all(db)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|b| (b.id, b.name))
        .collect();

    #[derive(Default)]
    struct BrandAgg {
        charge: Avg,
        consumption: Avg,
        battery: Avg,
        count: u64,
    }

    let mut agg: HashMap<String, BrandAgg> = HashMap::new();
    for v in &vehicles {
        let entry = agg.entry(v.brand_id.clone()).or_default();
        entry.count += 1;
        if let Some(status) = statuses.get(&v.id) {
            entry.charge.add(status.current_charge_level);
        }
        if let Some(model) = models.get(&v.model_id) {
            entry.consumption.add(model.average_consumption);
            entry.battery.add(model.battery_capacity as f64);
        }
    }

    let mut entries: Vec<BrandAnalyticsEntry> = agg
        .into_iter()
        .map(|(brand_id, a)| BrandAnalyticsEntry {
            brand_name: brands.get(&brand_id).cloned().unwrap_or_default(),
            brand_id,
            average_charge: a.charge.value(),
            average_consumption: a.consumption.value(),
            average_battery_capacity: a.battery.value(),
            vehicles_count: a.count,
        })
        .collect();
    entries.sort_by(|a, b| a.brand_name.cmp(&b.brand_name));

    Json(ApiResponse::success(entries))
}

// ── 2. Per-model efficiency ────────────────────────────────────

/// Consumption and battery capacity per model, with vehicle counts.
pub async fn fleet_efficiency(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<ModelEfficiencyEntry>>> {
    let (vehicles, _, models) = load_fleet(&state.db).await;

    #[derive(Default)]
    struct ModelAgg {
        consumption: Avg,
        battery: Avg,
        count: u64,
    }

    let mut agg: HashMap<String, ModelAgg> = HashMap::new();
    for v in &vehicles {
        let entry = agg.entry(v.model_id.clone()).or_default();
        entry.count += 1;
        if let Some(model) = models.get(&v.model_id) {
            entry.consumption.add(model.average_consumption);
            entry.battery.add(model.battery_capacity as f64);
        }
    }

    let mut entries: Vec<ModelEfficiencyEntry> = agg
        .into_iter()
        .map(|(model_id, a)| ModelEfficiencyEntry {
            model_name: models
                .get(&model_id)
                .map(|m| m.name.clone())
                .unwrap_or_default(),
            model_id,
            avg_consumption: a.consumption.value(),
            avg_battery_capacity: a.battery.value(),
            vehicles_count: a.count,
        })
        .collect();
    entries.sort_by(|a, b| a.model_name.cmp(&b.model_name));

    Json(ApiResponse::success(entries))
}

// ── 3. Emissions by powertrain ─────────────────────────────────

/// BEV vs ICE emission comparison.
pub async fn fleet_emissions(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<EmissionsByPowertrainEntry>>> {
    let (vehicles, _, models) = load_fleet(&state.db).await;

    let mut agg: HashMap<&'static str, (Avg, u64)> = HashMap::new();
    for v in &vehicles {
        if let Some(model) = models.get(&v.model_id) {
            let entry = agg.entry(powertrain_label(&model.powertrain)).or_default();
            entry.0.add(model.emission_gco2);
            entry.1 += 1;
        }
    }

    let mut entries: Vec<EmissionsByPowertrainEntry> = agg
        .into_iter()
        .map(|(powertrain, (avg, count))| EmissionsByPowertrainEntry {
            powertrain: powertrain.to_string(),
            avg_emission: avg.value(),
            vehicles_count: count,
        })
        .collect();
    entries.sort_by(|a, b| a.powertrain.cmp(&b.powertrain));

    Json(ApiResponse::success(entries))
}

// ── 4. Fleet composition ───────────────────────────────────────

/// Share of the fleet per powertrain.
pub async fn fleet_composition(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<FleetCompositionEntry>>> {
    let (vehicles, _, models) = load_fleet(&state.db).await;
    let total = vehicles.len() as u64;

    let mut counts: HashMap<&'static str, u64> = HashMap::new();
    for v in &vehicles {
        if let Some(model) = models.get(&v.model_id) {
            *counts.entry(powertrain_label(&model.powertrain)).or_default() += 1;
        }
    }

    let mut entries: Vec<FleetCompositionEntry> = counts
        .into_iter()
        .map(|(powertrain, count)| FleetCompositionEntry {
            powertrain: powertrain.to_string(),
            count,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
        })
        .collect();
    entries.sort_by(|a, b| a.powertrain.cmp(&b.powertrain));

    Json(ApiResponse::success(entries))
}

// ── 5. Operational counters ────────────────────────────────────

/// Availability, charging and in-use counts across the fleet.
pub async fn fleet_operational(
    State(state): State<AppState>,
) -> Json<ApiResponse<FleetOperationalResponse>> {
    let (vehicles, statuses, _) = load_fleet(&state.db).await;
    let total = vehicles.len() as u64;

    let mut available = 0u64;
    let mut charging = 0u64;
    let mut in_use = 0u64;
    for v in &vehicles {
        match statuses.get(&v.id).map(|s| s.status.as_str()) {
            Some(status_token::AVAILABLE) => available += 1,
            Some(status_token::CHARGING) => charging += 1,
            Some(status_token::IN_USE) => in_use += 1,
            _ => {}
        }
    }

    let availability_rate = if total == 0 {
        0.0
    } else {
        available as f64 * 100.0 / total as f64
    };

    Json(ApiResponse::success(FleetOperationalResponse {
        total_vehicles: total,
        available_count: available,
        charging_count: charging,
        in_use_count: in_use,
        availability_rate,
    }))
}
