//! Vehicle and vehicle status domain entities

use chrono::{DateTime, Utc};

/// Well-known status tokens. The status column itself is free-form text
/// (lower-cased on ingestion), these are the values the fleet actually uses.
pub mod status_token {
    pub const AVAILABLE: &str = "available";
    pub const CHARGING: &str = "charging";
    pub const IN_USE: &str = "in_use";
}

/// A fleet vehicle referencing its brand and model.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: String,
    /// Caller-supplied natural key used for deduplication across repeated
    /// imports. Blank on manually created vehicles.
    pub external_id: Option<String>,
    pub name: String,
    pub brand_id: String,
    pub model_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Build a vehicle with a fresh uuid identity.
    pub fn new(
        external_id: Option<String>,
        name: impl Into<String>,
        brand_id: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            external_id,
            name: name.into(),
            brand_id: brand_id.into(),
            model_id: model_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Operational status paired 1:1 with a vehicle.
#[derive(Debug, Clone)]
pub struct VehicleStatus {
    /// Assigned by the store on insert; 0 until then.
    pub id: i32,
    /// Charge level in percent
    pub current_charge_level: f64,
    pub status: String,
    pub vehicle_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleStatus {
    pub fn new(
        vehicle_id: impl Into<String>,
        current_charge_level: f64,
        status: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            current_charge_level,
            status: status.into(),
            vehicle_id: vehicle_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Optional criteria for vehicle listings.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub brand_id: Option<String>,
    pub model_id: Option<String>,
    pub status: Option<String>,
}
