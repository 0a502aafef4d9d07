//! Vehicle and vehicle status repository interfaces

use async_trait::async_trait;

use super::model::{Vehicle, VehicleFilter, VehicleStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Vehicle>>;
    /// Dedup lookup for imports. Only meaningful for non-blank external ids.
    async fn find_by_external_id(&self, external_id: &str) -> DomainResult<Option<Vehicle>>;
    async fn find_all(&self, filter: &VehicleFilter) -> DomainResult<Vec<Vehicle>>;
    async fn save(&self, vehicle: Vehicle) -> DomainResult<Vehicle>;
    async fn update(&self, vehicle: Vehicle) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}

#[async_trait]
pub trait VehicleStatusRepository: Send + Sync {
    async fn find_by_vehicle(&self, vehicle_id: &str) -> DomainResult<Option<VehicleStatus>>;
    /// Insert a new status row; the store assigns its id.
    async fn save(&self, status: VehicleStatus) -> DomainResult<VehicleStatus>;
    async fn update(&self, status: VehicleStatus) -> DomainResult<()>;
    async fn delete_for_vehicle(&self, vehicle_id: &str) -> DomainResult<()>;
}
