//! Vehicle model entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Powertrain type
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Powertrain {
    /// Battery electric vehicle
    #[sea_orm(string_value = "BEV")]
    Bev,
    /// Internal combustion engine
    #[sea_orm(string_value = "ICE")]
    Ice,
}

impl Default for Powertrain {
    fn default() -> Self {
        Self::Bev
    }
}

/// Vehicle model row - technical characteristics shared by vehicles
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle_models")]
pub struct Model {
    /// Unique model id (uuid)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Model name (e.g. "Zoe", "Model 3")
    pub name: String,

    /// Battery capacity in kWh
    pub battery_capacity: i32,

    /// Average consumption in the internal unit (BEV figures arrive as
    /// kWh/100km and are scaled ×10 on ingestion, ICE stays L/100km)
    pub average_consumption: f64,

    /// Emissions in gCO2/km
    pub emission_gco2: f64,

    pub powertrain: Powertrain,

    /// Owning brand (uuid)
    pub brand_id: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id"
    )]
    Brand,
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
