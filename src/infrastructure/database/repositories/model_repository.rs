//! SeaORM implementation of ModelRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::{DomainError, DomainResult, ModelRepository, Powertrain, VehicleModel};
use crate::infrastructure::database::entities::vehicle_model;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: vehicle_model::Model) -> VehicleModel {
    VehicleModel {
        id: m.id,
        name: m.name,
        battery_capacity: m.battery_capacity,
        average_consumption: m.average_consumption,
        emission_gco2: m.emission_gco2,
        powertrain: match m.powertrain {
            vehicle_model::Powertrain::Bev => Powertrain::Bev,
            vehicle_model::Powertrain::Ice => Powertrain::Ice,
        },
        brand_id: m.brand_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn powertrain_to_entity(p: Powertrain) -> vehicle_model::Powertrain {
    match p {
        Powertrain::Bev => vehicle_model::Powertrain::Bev,
        Powertrain::Ice => vehicle_model::Powertrain::Ice,
    }
}

// ── SeaOrmModelRepository ───────────────────────────────────────

pub struct SeaOrmModelRepository {
    db: DatabaseConnection,
}

impl SeaOrmModelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ModelRepository for SeaOrmModelRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<VehicleModel>> {
        let model = vehicle_model::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_name_and_brand(
        &self,
        name: &str,
        brand_id: &str,
    ) -> DomainResult<Option<VehicleModel>> {
        let model = vehicle_model::Entity::find()
            .filter(vehicle_model::Column::Name.eq(name))
            .filter(vehicle_model::Column::BrandId.eq(brand_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<VehicleModel>> {
        let models = vehicle_model::Entity::find()
            .order_by_asc(vehicle_model::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, m: VehicleModel) -> DomainResult<VehicleModel> {
        let model = vehicle_model::ActiveModel {
            id: Set(m.id),
            name: Set(m.name),
            battery_capacity: Set(m.battery_capacity),
            average_consumption: Set(m.average_consumption),
            emission_gco2: Set(m.emission_gco2),
            powertrain: Set(powertrain_to_entity(m.powertrain)),
            brand_id: Set(m.brand_id),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Model saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, m: VehicleModel) -> DomainResult<()> {
        let existing = vehicle_model::Entity::find_by_id(&m.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Model",
                field: "id",
                value: m.id,
            });
        };

        let model = vehicle_model::ActiveModel {
            id: Set(m.id),
            name: Set(m.name),
            battery_capacity: Set(m.battery_capacity),
            average_consumption: Set(m.average_consumption),
            emission_gco2: Set(m.emission_gco2),
            powertrain: Set(powertrain_to_entity(m.powertrain)),
            brand_id: Set(m.brand_id),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = vehicle_model::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Model",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
