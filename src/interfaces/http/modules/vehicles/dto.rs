//! Vehicle DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{Vehicle, VehicleStatus};

#[derive(Debug, Serialize)]
pub struct VehicleStatusDto {
    pub id: i32,
    pub current_charge_level: f64,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl From<VehicleStatus> for VehicleStatusDto {
    fn from(s: VehicleStatus) -> Self {
        Self {
            id: s.id,
            current_charge_level: s.current_charge_level,
            status: s.status,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub external_id: Option<String>,
    pub name: String,
    pub brand_id: String,
    pub model_id: String,
    pub status: Option<VehicleStatusDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleResponse {
    pub fn from_parts(v: Vehicle, status: Option<VehicleStatus>) -> Self {
        Self {
            id: v.id,
            external_id: v.external_id,
            name: v.name,
            brand_id: v.brand_id,
            model_id: v.model_id,
            status: status.map(Into::into),
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

/// Query parameters for vehicle listings.
#[derive(Debug, Deserialize)]
pub struct VehicleListParams {
    /// Brand id
    pub brand: Option<String>,
    /// Model id
    pub model: Option<String>,
    /// Status token (available, charging, in_use)
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct InitialStatusRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "charge level must be 0-100"))]
    pub current_charge_level: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub external_id: Option<String>,
    #[validate(length(min = 1, max = 200, message = "vehicle name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "brand_id is required"))]
    pub brand_id: String,
    #[validate(length(min = 1, message = "model_id is required"))]
    pub model_id: String,
    /// Inline initial status; defaults apply when omitted
    #[validate(nested)]
    pub status: Option<InitialStatusRequest>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub external_id: Option<String>,
    #[validate(length(min = 1, max = 200, message = "vehicle name must not be empty"))]
    pub name: Option<String>,
    pub brand_id: Option<String>,
    pub model_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleStatusRequest {
    #[validate(range(min = 0.0, max = 100.0, message = "charge level must be 0-100"))]
    pub current_charge_level: Option<f64>,
    pub status: Option<String>,
}
