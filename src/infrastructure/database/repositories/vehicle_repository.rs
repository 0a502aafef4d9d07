//! SeaORM implementations of VehicleRepository and VehicleStatusRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::db_err;
use crate::domain::{
    DomainError, DomainResult, Vehicle, VehicleFilter, VehicleRepository, VehicleStatus,
    VehicleStatusRepository,
};
use crate::infrastructure::database::entities::{vehicle, vehicle_status};

// ── Conversion helpers ──────────────────────────────────────────

fn vehicle_to_domain(v: vehicle::Model) -> Vehicle {
    Vehicle {
        id: v.id,
        external_id: v.external_id,
        name: v.name,
        brand_id: v.brand_id,
        model_id: v.model_id,
        created_at: v.created_at,
        updated_at: v.updated_at,
    }
}

fn status_to_domain(s: vehicle_status::Model) -> VehicleStatus {
    VehicleStatus {
        id: s.id,
        current_charge_level: s.current_charge_level,
        status: s.status,
        vehicle_id: s.vehicle_id,
        created_at: s.created_at,
        updated_at: s.updated_at,
    }
}

// ── SeaOrmVehicleRepository ─────────────────────────────────────

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(vehicle_to_domain))
    }

    async fn find_by_external_id(&self, external_id: &str) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find()
            .filter(vehicle::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(vehicle_to_domain))
    }

    async fn find_all(&self, filter: &VehicleFilter) -> DomainResult<Vec<Vehicle>> {
        let mut query = vehicle::Entity::find();

        if let Some(brand_id) = &filter.brand_id {
            query = query.filter(vehicle::Column::BrandId.eq(brand_id));
        }
        if let Some(model_id) = &filter.model_id {
            query = query.filter(vehicle::Column::ModelId.eq(model_id));
        }
        if let Some(status) = &filter.status {
            query = query
                .join(JoinType::InnerJoin, vehicle::Relation::VehicleStatus.def())
                .filter(vehicle_status::Column::Status.eq(status));
        }

        let models = query
            .order_by_asc(vehicle::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(vehicle_to_domain).collect())
    }

    async fn save(&self, v: Vehicle) -> DomainResult<Vehicle> {
        let model = vehicle::ActiveModel {
            id: Set(v.id),
            external_id: Set(v.external_id),
            name: Set(v.name),
            brand_id: Set(v.brand_id),
            model_id: Set(v.model_id),
            created_at: Set(v.created_at),
            updated_at: Set(v.updated_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Vehicle saved: {} ({})", result.name, result.id);
        Ok(vehicle_to_domain(result))
    }

    async fn update(&self, v: Vehicle) -> DomainResult<()> {
        let existing = vehicle::Entity::find_by_id(&v.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Vehicle",
                field: "id",
                value: v.id,
            });
        };

        let model = vehicle::ActiveModel {
            id: Set(v.id),
            external_id: Set(v.external_id),
            name: Set(v.name),
            brand_id: Set(v.brand_id),
            model_id: Set(v.model_id),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = vehicle::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Vehicle",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}

// ── SeaOrmVehicleStatusRepository ───────────────────────────────

pub struct SeaOrmVehicleStatusRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleStatusRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleStatusRepository for SeaOrmVehicleStatusRepository {
    async fn find_by_vehicle(&self, vehicle_id: &str) -> DomainResult<Option<VehicleStatus>> {
        let model = vehicle_status::Entity::find()
            .filter(vehicle_status::Column::VehicleId.eq(vehicle_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(status_to_domain))
    }

    async fn save(&self, s: VehicleStatus) -> DomainResult<VehicleStatus> {
        let model = vehicle_status::ActiveModel {
            id: ActiveValue::NotSet,
            current_charge_level: Set(s.current_charge_level),
            status: Set(s.status),
            vehicle_id: Set(s.vehicle_id),
            created_at: Set(s.created_at),
            updated_at: Set(s.updated_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Vehicle status saved for {} ({})",
            result.vehicle_id, result.status
        );
        Ok(status_to_domain(result))
    }

    async fn update(&self, s: VehicleStatus) -> DomainResult<()> {
        let existing = vehicle_status::Entity::find_by_id(s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "VehicleStatus",
                field: "id",
                value: s.id.to_string(),
            });
        };

        let model = vehicle_status::ActiveModel {
            id: Set(s.id),
            current_charge_level: Set(s.current_charge_level),
            status: Set(s.status),
            vehicle_id: Set(s.vehicle_id),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete_for_vehicle(&self, vehicle_id: &str) -> DomainResult<()> {
        vehicle_status::Entity::delete_many()
            .filter(vehicle_status::Column::VehicleId.eq(vehicle_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
