//! Vehicle status entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Operational status row, paired 1:1 with a vehicle
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle_statuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Charge level in percent
    pub current_charge_level: f64,

    /// Lower-cased status token: available, charging, in_use
    pub status: String,

    /// Owning vehicle (uuid, unique)
    pub vehicle_id: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id"
    )]
    Vehicle,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
