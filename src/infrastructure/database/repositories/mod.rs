//! SeaORM repository implementations

pub mod brand_repository;
pub mod model_repository;
pub mod repository_provider;
pub mod vehicle_repository;

pub use brand_repository::SeaOrmBrandRepository;
pub use model_repository::SeaOrmModelRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use vehicle_repository::{SeaOrmVehicleRepository, SeaOrmVehicleStatusRepository};

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}
