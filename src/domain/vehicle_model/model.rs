//! Vehicle model domain entity

use chrono::{DateTime, Utc};

/// Powertrain of a vehicle model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Powertrain {
    /// Battery electric vehicle
    Bev,
    /// Internal combustion engine
    Ice,
}

impl Default for Powertrain {
    fn default() -> Self {
        Self::Bev
    }
}

impl Powertrain {
    /// Map a raw upper-cased token: exactly `ICE` is combustion, anything
    /// else falls back to BEV.
    pub fn from_token(token: &str) -> Self {
        if token == "ICE" {
            Self::Ice
        } else {
            Self::Bev
        }
    }
}

impl std::fmt::Display for Powertrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bev => write!(f, "BEV"),
            Self::Ice => write!(f, "ICE"),
        }
    }
}

/// A vehicle model belonging to a brand.
///
/// `average_consumption` is stored in the internal unit: BEV figures arrive
/// as kWh/100km and are scaled ×10 on ingestion, ICE figures (L/100km) are
/// stored unconverted.
#[derive(Debug, Clone)]
pub struct VehicleModel {
    pub id: String,
    pub name: String,
    /// Battery capacity in kWh
    pub battery_capacity: i32,
    pub average_consumption: f64,
    /// Emissions in gCO2/km
    pub emission_gco2: f64,
    pub powertrain: Powertrain,
    pub brand_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleModel {
    /// Build a model with a fresh uuid identity.
    pub fn new(
        name: impl Into<String>,
        brand_id: impl Into<String>,
        battery_capacity: i32,
        average_consumption: f64,
        emission_gco2: f64,
        powertrain: Powertrain,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            battery_capacity,
            average_consumption,
            emission_gco2,
            powertrain,
            brand_id: brand_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powertrain_token_mapping() {
        assert_eq!(Powertrain::from_token("ICE"), Powertrain::Ice);
        assert_eq!(Powertrain::from_token("BEV"), Powertrain::Bev);
        // anything unrecognized defaults to BEV
        assert_eq!(Powertrain::from_token("PHEV"), Powertrain::Bev);
        assert_eq!(Powertrain::from_token(""), Powertrain::Bev);
    }

    #[test]
    fn powertrain_display() {
        assert_eq!(Powertrain::Bev.to_string(), "BEV");
        assert_eq!(Powertrain::Ice.to_string(), "ICE");
    }
}
