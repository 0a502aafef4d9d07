//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to all per-aggregate
//! repositories; consumers request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let brand = repos.brands().find_by_name("Acme").await?;
//!     let vehicle = repos.vehicles().find_by_external_id("ext-1").await?;
//! }
//! ```

use super::brand::BrandRepository;
use super::vehicle::{VehicleRepository, VehicleStatusRepository};
use super::vehicle_model::ModelRepository;

/// Provides access to all domain repositories.
pub trait RepositoryProvider: Send + Sync {
    fn brands(&self) -> &dyn BrandRepository;
    fn models(&self) -> &dyn ModelRepository;
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn statuses(&self) -> &dyn VehicleStatusRepository;
}
