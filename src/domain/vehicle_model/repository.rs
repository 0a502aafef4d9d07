//! Vehicle model repository interface

use async_trait::async_trait;

use super::model::VehicleModel;
use crate::domain::DomainResult;

#[async_trait]
pub trait ModelRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<VehicleModel>>;
    /// Lookup on the importer's natural key (name, brand). The same model
    /// name may exist under two different brands as two rows.
    async fn find_by_name_and_brand(
        &self,
        name: &str,
        brand_id: &str,
    ) -> DomainResult<Option<VehicleModel>>;
    async fn find_all(&self) -> DomainResult<Vec<VehicleModel>>;
    async fn save(&self, model: VehicleModel) -> DomainResult<VehicleModel>;
    async fn update(&self, model: VehicleModel) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
