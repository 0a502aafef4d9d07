//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    BrandRepository, ModelRepository, RepositoryProvider, VehicleRepository,
    VehicleStatusRepository,
};

use super::brand_repository::SeaOrmBrandRepository;
use super::model_repository::SeaOrmModelRepository;
use super::vehicle_repository::{SeaOrmVehicleRepository, SeaOrmVehicleStatusRepository};

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let brand = repos.brands().find_by_name("Renault").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    brands: SeaOrmBrandRepository,
    models: SeaOrmModelRepository,
    vehicles: SeaOrmVehicleRepository,
    statuses: SeaOrmVehicleStatusRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            brands: SeaOrmBrandRepository::new(db.clone()),
            models: SeaOrmModelRepository::new(db.clone()),
            vehicles: SeaOrmVehicleRepository::new(db.clone()),
            statuses: SeaOrmVehicleStatusRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn brands(&self) -> &dyn BrandRepository {
        &self.brands
    }

    fn models(&self) -> &dyn ModelRepository {
        &self.models
    }

    fn vehicles(&self) -> &dyn VehicleRepository {
        &self.vehicles
    }

    fn statuses(&self) -> &dyn VehicleStatusRepository {
        &self.statuses
    }
}
