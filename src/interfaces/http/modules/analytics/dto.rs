//! Analytics DTOs

use serde::Serialize;

/// Per-brand averages over the vehicles referencing it.
#[derive(Debug, Serialize)]
pub struct BrandAnalyticsEntry {
    pub brand_id: String,
    pub brand_name: String,
    pub average_charge: f64,
    pub average_consumption: f64,
    pub average_battery_capacity: f64,
    pub vehicles_count: u64,
}

/// Per-model efficiency figures.
#[derive(Debug, Serialize)]
pub struct ModelEfficiencyEntry {
    pub model_id: String,
    pub model_name: String,
    pub avg_consumption: f64,
    pub avg_battery_capacity: f64,
    pub vehicles_count: u64,
}

/// Average emissions per powertrain.
#[derive(Debug, Serialize)]
pub struct EmissionsByPowertrainEntry {
    pub powertrain: String,
    pub avg_emission: f64,
    pub vehicles_count: u64,
}

/// Fleet share per powertrain.
#[derive(Debug, Serialize)]
pub struct FleetCompositionEntry {
    pub powertrain: String,
    pub count: u64,
    pub percentage: f64,
}

/// Operational counters across the whole fleet.
#[derive(Debug, Serialize)]
pub struct FleetOperationalResponse {
    pub total_vehicles: u64,
    pub available_count: u64,
    pub charging_count: u64,
    pub in_use_count: u64,
    /// Share of available vehicles in percent; 0 for an empty fleet
    pub availability_rate: f64,
}
