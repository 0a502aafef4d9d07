//! Typed field resolution for import rows
//!
//! Input files arrive with inconsistent header spellings, so every logical
//! field carries an ordered alias list; the first alias with a non-empty
//! value wins. Malformed values degrade to defaults instead of failing —
//! only a missing brand or model name disqualifies a row.

use super::parser::RowRecord;
use crate::domain::Powertrain;

const EXTERNAL_ID: &[&str] = &["ID", "id", "ExternalId"];
const BRAND: &[&str] = &["Brand", "brand"];
const MODEL: &[&str] = &["Model", "model"];
const BATTERY_CAPACITY: &[&str] = &["Battery capacity (kWh)", "Battery capacity"];
const CURRENT_CHARGE: &[&str] = &["Current charge level (%)", "Current charge level"];
const STATUS: &[&str] = &["Status"];
const AVG_CONSUMPTION: &[&str] = &[
    "Average energy consumption (kWh/100km or L/100km)",
    "Average energy consumption",
];
const POWERTRAIN: &[&str] = &["Type"];
const EMISSION: &[&str] = &["Emission_gco2_km"];

const DEFAULT_STATUS: &str = "available";

/// A fully resolved vehicle row, ready for reconciliation.
///
/// `average_consumption` is already unit-normalized: the input column mixes
/// kWh/100km (BEV) and L/100km (ICE) under one header, so BEV values are
/// scaled ×10 into the internal unit and ICE values are stored raw.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub external_id: String,
    pub brand_name: String,
    pub model_name: String,
    pub battery_capacity: i32,
    pub current_charge_level: f64,
    pub status: String,
    pub average_consumption: f64,
    pub powertrain: Powertrain,
    pub emission_gco2: f64,
}

impl VehicleRecord {
    /// Resolve a parsed row. Returns `None` when the brand or model name is
    /// missing; such rows must be skipped before any store access happens.
    pub fn resolve(row: &RowRecord) -> Option<Self> {
        let brand_name = row.first_of(BRAND).unwrap_or_default().to_string();
        let model_name = row.first_of(MODEL).unwrap_or_default().to_string();
        if brand_name.is_empty() || model_name.is_empty() {
            return None;
        }

        let powertrain =
            Powertrain::from_token(&row.first_of(POWERTRAIN).unwrap_or("BEV").to_uppercase());

        let raw_consumption = parse_float(row.first_of(AVG_CONSUMPTION));
        let average_consumption = match powertrain {
            Powertrain::Bev => raw_consumption * 10.0,
            Powertrain::Ice => raw_consumption,
        };

        Some(Self {
            external_id: row.first_of(EXTERNAL_ID).unwrap_or_default().to_string(),
            brand_name,
            model_name,
            battery_capacity: parse_int(row.first_of(BATTERY_CAPACITY)),
            current_charge_level: parse_float(row.first_of(CURRENT_CHARGE)),
            status: row.first_of(STATUS).unwrap_or(DEFAULT_STATUS).to_lowercase(),
            average_consumption,
            powertrain,
            emission_gco2: parse_float(row.first_of(EMISSION)),
        })
    }
}

fn parse_int(value: Option<&str>) -> i32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn parse_float(value: Option<&str>) -> f64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0.0)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Option<VehicleRecord> {
        VehicleRecord::resolve(&RowRecord::from_pairs(pairs))
    }

    #[test]
    fn missing_brand_or_model_disqualifies_the_row() {
        assert!(record(&[("Brand", ""), ("Model", "ModelX")]).is_none());
        assert!(record(&[("Brand", "Acme"), ("Model", "")]).is_none());
        assert!(record(&[("Status", "charging")]).is_none());
    }

    #[test]
    fn alias_priority_first_match_wins() {
        let rec = record(&[
            ("Brand", "Acme"),
            ("Model", "ModelX"),
            ("ID", "ext-1"),
            ("id", "ext-2"),
        ])
        .unwrap();
        assert_eq!(rec.external_id, "ext-1");
    }

    #[test]
    fn empty_alias_falls_through_to_the_next() {
        let rec = record(&[
            ("Brand", "Acme"),
            ("Model", "ModelX"),
            ("ID", ""),
            ("ExternalId", "ext-9"),
        ])
        .unwrap();
        assert_eq!(rec.external_id, "ext-9");
    }

    #[test]
    fn defaults_when_optional_fields_absent() {
        let rec = record(&[("Brand", "Acme"), ("Model", "ModelX")]).unwrap();
        assert_eq!(rec.external_id, "");
        assert_eq!(rec.battery_capacity, 0);
        assert_eq!(rec.current_charge_level, 0.0);
        assert_eq!(rec.status, "available");
        assert_eq!(rec.powertrain, Powertrain::Bev);
        assert_eq!(rec.average_consumption, 0.0);
        assert_eq!(rec.emission_gco2, 0.0);
    }

    #[test]
    fn malformed_numbers_degrade_to_zero() {
        let rec = record(&[
            ("Brand", "Acme"),
            ("Model", "ModelX"),
            ("Battery capacity (kWh)", "lots"),
            ("Current charge level (%)", "n/a"),
            ("Emission_gco2_km", "-"),
        ])
        .unwrap();
        assert_eq!(rec.battery_capacity, 0);
        assert_eq!(rec.current_charge_level, 0.0);
        assert_eq!(rec.emission_gco2, 0.0);
    }

    #[test]
    fn status_is_lower_cased_verbatim() {
        let rec = record(&[
            ("Brand", "Acme"),
            ("Model", "ModelX"),
            ("Status", "ChArGiNg"),
        ])
        .unwrap();
        assert_eq!(rec.status, "charging");

        // free-form tokens pass through untouched apart from case
        let rec = record(&[("Brand", "Acme"), ("Model", "ModelX"), ("Status", "Broken")]).unwrap();
        assert_eq!(rec.status, "broken");
    }

    #[test]
    fn powertrain_token_is_upper_cased_before_mapping() {
        let rec = record(&[("Brand", "Acme"), ("Model", "ModelX"), ("Type", "ice")]).unwrap();
        assert_eq!(rec.powertrain, Powertrain::Ice);

        let rec = record(&[("Brand", "Acme"), ("Model", "ModelX"), ("Type", "hybrid")]).unwrap();
        assert_eq!(rec.powertrain, Powertrain::Bev);
    }

    #[test]
    fn bev_consumption_is_scaled_ten_times() {
        let rec = record(&[
            ("Brand", "Acme"),
            ("Model", "ModelX"),
            ("Type", "BEV"),
            ("Average energy consumption (kWh/100km or L/100km)", "15"),
        ])
        .unwrap();
        assert_eq!(rec.average_consumption, 150.0);
    }

    #[test]
    fn ice_consumption_is_stored_raw() {
        let rec = record(&[
            ("Brand", "Acme"),
            ("Model", "ModelX"),
            ("Type", "ICE"),
            ("Average energy consumption (kWh/100km or L/100km)", "15"),
        ])
        .unwrap();
        assert_eq!(rec.average_consumption, 15.0);
    }

    #[test]
    fn short_consumption_header_is_accepted() {
        let rec = record(&[
            ("Brand", "Acme"),
            ("Model", "ModelX"),
            ("Type", "ICE"),
            ("Average energy consumption", "6.5"),
        ])
        .unwrap();
        assert_eq!(rec.average_consumption, 6.5);
    }
}
