//! Vehicle entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fleet vehicle row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    /// Unique vehicle id (uuid)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Import dedup key; null for manually created vehicles
    #[sea_orm(nullable)]
    pub external_id: Option<String>,

    /// Display name ("<brand> <model>" for imported vehicles)
    pub name: String,

    /// Owning brand (uuid)
    pub brand_id: String,

    /// Owning model (uuid)
    pub model_id: String,

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
    #[sea_orm(
        belongs_to = "super::vehicle_model::Entity",
        from = "Column::ModelId",
        to = "super::vehicle_model::Column::Id"
    )]
    VehicleModel,
    #[sea_orm(has_one = "super::vehicle_status::Entity")]
    VehicleStatus,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::vehicle_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleModel.def()
    }
}

impl Related<super::vehicle_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
