//! Vehicle model DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{Powertrain, VehicleModel};

#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub id: String,
    pub name: String,
    pub battery_capacity: i32,
    pub average_consumption: f64,
    pub emission_gco2: f64,
    pub powertrain: String,
    pub brand_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VehicleModel> for ModelResponse {
    fn from(m: VehicleModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            battery_capacity: m.battery_capacity,
            average_consumption: m.average_consumption,
            emission_gco2: m.emission_gco2,
            powertrain: m.powertrain.to_string(),
            brand_id: m.brand_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateModelRequest {
    #[validate(length(min = 1, max = 100, message = "model name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "brand_id is required"))]
    pub brand_id: String,
    #[validate(range(min = 0, message = "battery_capacity must be non-negative"))]
    pub battery_capacity: i32,
    #[validate(range(min = 0.0, message = "average_consumption must be non-negative"))]
    pub average_consumption: f64,
    pub emission_gco2: f64,
    /// "BEV" or "ICE"; anything else falls back to BEV
    pub powertrain: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateModelRequest {
    #[validate(length(min = 1, max = 100, message = "model name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "battery_capacity must be non-negative"))]
    pub battery_capacity: Option<i32>,
    #[validate(range(min = 0.0, message = "average_consumption must be non-negative"))]
    pub average_consumption: Option<f64>,
    pub emission_gco2: Option<f64>,
    pub powertrain: Option<String>,
}

/// Map a request token to a powertrain; BEV is the fallback.
pub fn parse_powertrain(s: &str) -> Powertrain {
    Powertrain::from_token(&s.to_uppercase())
}
