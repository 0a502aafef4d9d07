pub mod brand;
pub mod error;
pub mod repositories;
pub mod vehicle;
pub mod vehicle_model;

// Re-export commonly used types
pub use brand::{Brand, BrandRepository};
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use vehicle::{
    status_token, Vehicle, VehicleFilter, VehicleRepository, VehicleStatus,
    VehicleStatusRepository,
};
pub use vehicle_model::{ModelRepository, Powertrain, VehicleModel};
