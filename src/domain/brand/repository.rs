//! Brand repository interface

use async_trait::async_trait;

use super::model::Brand;
use crate::domain::DomainResult;

#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Brand>>;
    /// Exact-match lookup used by the importer's resolve-or-create pass.
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Brand>>;
    async fn find_all(&self) -> DomainResult<Vec<Brand>>;
    async fn save(&self, brand: Brand) -> DomainResult<Brand>;
    async fn update(&self, brand: Brand) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
