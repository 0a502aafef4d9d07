//! In-memory repository implementations for development and testing
//!
//! Backed by dashmap; id assignment mirrors the database implementations
//! (uuid ids come in with the domain value, status ids are handed out from
//! a counter on insert).

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Brand, BrandRepository, DomainError, DomainResult, ModelRepository, RepositoryProvider,
    Vehicle, VehicleFilter, VehicleModel, VehicleRepository, VehicleStatus,
    VehicleStatusRepository,
};

fn not_found(entity: &'static str, field: &'static str, value: &str) -> DomainError {
    DomainError::NotFound {
        entity,
        field,
        value: value.to_string(),
    }
}

// ── Brands ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryBrandRepository {
    rows: DashMap<String, Brand>,
}

impl InMemoryBrandRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Brand>> {
        Ok(self.rows.get(id).map(|r| r.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Brand>> {
        Ok(self.rows.iter().find(|r| r.name == name).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Brand>> {
        let mut brands: Vec<Brand> = self.rows.iter().map(|r| r.value().clone()).collect();
        brands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(brands)
    }

    async fn save(&self, brand: Brand) -> DomainResult<Brand> {
        self.rows.insert(brand.id.clone(), brand.clone());
        Ok(brand)
    }

    async fn update(&self, brand: Brand) -> DomainResult<()> {
        if !self.rows.contains_key(&brand.id) {
            return Err(not_found("Brand", "id", &brand.id));
        }
        self.rows.insert(brand.id.clone(), brand);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.rows
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found("Brand", "id", id))
    }
}

// ── Models ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryModelRepository {
    rows: DashMap<String, VehicleModel>,
}

impl InMemoryModelRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ModelRepository for InMemoryModelRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<VehicleModel>> {
        Ok(self.rows.get(id).map(|r| r.value().clone()))
    }

    async fn find_by_name_and_brand(
        &self,
        name: &str,
        brand_id: &str,
    ) -> DomainResult<Option<VehicleModel>> {
        Ok(self
            .rows
            .iter()
            .find(|r| r.name == name && r.brand_id == brand_id)
            .map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<VehicleModel>> {
        let mut models: Vec<VehicleModel> = self.rows.iter().map(|r| r.value().clone()).collect();
        models.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(models)
    }

    async fn save(&self, model: VehicleModel) -> DomainResult<VehicleModel> {
        self.rows.insert(model.id.clone(), model.clone());
        Ok(model)
    }

    async fn update(&self, model: VehicleModel) -> DomainResult<()> {
        if !self.rows.contains_key(&model.id) {
            return Err(not_found("Model", "id", &model.id));
        }
        self.rows.insert(model.id.clone(), model);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.rows
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found("Model", "id", id))
    }
}

// ── Vehicles ───────────────────────────────────────────────────

pub struct InMemoryVehicleRepository {
    rows: DashMap<String, Vehicle>,
    // shared with the status repository so the status filter can join
    statuses: Arc<DashMap<i32, VehicleStatus>>,
}

impl InMemoryVehicleRepository {
    pub fn new(statuses: Arc<DashMap<i32, VehicleStatus>>) -> Self {
        Self {
            rows: DashMap::new(),
            statuses,
        }
    }

    fn status_of(&self, vehicle_id: &str) -> Option<String> {
        self.statuses
            .iter()
            .find(|s| s.vehicle_id == vehicle_id)
            .map(|s| s.value().status.clone())
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Vehicle>> {
        Ok(self.rows.get(id).map(|r| r.value().clone()))
    }

    async fn find_by_external_id(&self, external_id: &str) -> DomainResult<Option<Vehicle>> {
        Ok(self
            .rows
            .iter()
            .find(|r| r.external_id.as_deref() == Some(external_id))
            .map(|r| r.value().clone()))
    }

    async fn find_all(&self, filter: &VehicleFilter) -> DomainResult<Vec<Vehicle>> {
        let mut vehicles: Vec<Vehicle> = self
            .rows
            .iter()
            .filter(|v| {
                filter
                    .brand_id
                    .as_ref()
                    .map_or(true, |brand_id| &v.brand_id == brand_id)
            })
            .filter(|v| {
                filter
                    .model_id
                    .as_ref()
                    .map_or(true, |model_id| &v.model_id == model_id)
            })
            .filter(|v| {
                filter
                    .status
                    .as_ref()
                    .map_or(true, |status| self.status_of(&v.id).as_ref() == Some(status))
            })
            .map(|v| v.value().clone())
            .collect();
        vehicles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(vehicles)
    }

    async fn save(&self, vehicle: Vehicle) -> DomainResult<Vehicle> {
        self.rows.insert(vehicle.id.clone(), vehicle.clone());
        Ok(vehicle)
    }

    async fn update(&self, vehicle: Vehicle) -> DomainResult<()> {
        if !self.rows.contains_key(&vehicle.id) {
            return Err(not_found("Vehicle", "id", &vehicle.id));
        }
        self.rows.insert(vehicle.id.clone(), vehicle);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.rows
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found("Vehicle", "id", id))
    }
}

// ── Vehicle statuses ───────────────────────────────────────────

pub struct InMemoryStatusRepository {
    rows: Arc<DashMap<i32, VehicleStatus>>,
    next_id: AtomicI32,
}

impl InMemoryStatusRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Handle for wiring a vehicle repository to the same status rows.
    pub fn rows_handle(&self) -> Arc<DashMap<i32, VehicleStatus>> {
        Arc::clone(&self.rows)
    }
}

impl Default for InMemoryStatusRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleStatusRepository for InMemoryStatusRepository {
    async fn find_by_vehicle(&self, vehicle_id: &str) -> DomainResult<Option<VehicleStatus>> {
        Ok(self
            .rows
            .iter()
            .find(|s| s.vehicle_id == vehicle_id)
            .map(|s| s.value().clone()))
    }

    async fn save(&self, mut status: VehicleStatus) -> DomainResult<VehicleStatus> {
        status.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(status.id, status.clone());
        Ok(status)
    }

    async fn update(&self, status: VehicleStatus) -> DomainResult<()> {
        if !self.rows.contains_key(&status.id) {
            return Err(not_found("VehicleStatus", "id", &status.id.to_string()));
        }
        self.rows.insert(status.id, status);
        Ok(())
    }

    async fn delete_for_vehicle(&self, vehicle_id: &str) -> DomainResult<()> {
        self.rows.retain(|_, s| s.vehicle_id != vehicle_id);
        Ok(())
    }
}

// ── Provider ───────────────────────────────────────────────────

/// In-memory repository provider wired over one shared status map.
pub struct InMemoryRepositoryProvider {
    brands: InMemoryBrandRepository,
    models: InMemoryModelRepository,
    vehicles: InMemoryVehicleRepository,
    statuses: InMemoryStatusRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let statuses = InMemoryStatusRepository::new();
        let vehicles = InMemoryVehicleRepository::new(statuses.rows_handle());
        Self {
            brands: InMemoryBrandRepository::new(),
            models: InMemoryModelRepository::new(),
            vehicles,
            statuses,
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
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

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(repos: &InMemoryRepositoryProvider) -> (Vehicle, Vehicle) {
        let zoe = repos
            .vehicles()
            .save(Vehicle::new(None, "Renault Zoe", "brand-r", "model-z"))
            .await
            .unwrap();
        let clio = repos
            .vehicles()
            .save(Vehicle::new(None, "Renault Clio", "brand-r", "model-c"))
            .await
            .unwrap();
        repos
            .statuses()
            .save(VehicleStatus::new(&zoe.id, 80.0, "charging"))
            .await
            .unwrap();
        repos
            .statuses()
            .save(VehicleStatus::new(&clio.id, 50.0, "available"))
            .await
            .unwrap();
        (zoe, clio)
    }

    #[tokio::test]
    async fn vehicle_filters_combine() {
        let repos = InMemoryRepositoryProvider::new();
        let (zoe, _) = seed(&repos).await;

        let all = repos
            .vehicles()
            .find_all(&VehicleFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let by_model = repos
            .vehicles()
            .find_all(&VehicleFilter {
                model_id: Some("model-z".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_model.len(), 1);
        assert_eq!(by_model[0].id, zoe.id);

        let charging = repos
            .vehicles()
            .find_all(&VehicleFilter {
                status: Some("charging".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(charging.len(), 1);
        assert_eq!(charging[0].id, zoe.id);

        let none = repos
            .vehicles()
            .find_all(&VehicleFilter {
                brand_id: Some("brand-x".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn status_ids_are_assigned_on_insert() {
        let repos = InMemoryRepositoryProvider::new();
        let (zoe, clio) = seed(&repos).await;

        let first = repos.statuses().find_by_vehicle(&zoe.id).await.unwrap().unwrap();
        let second = repos.statuses().find_by_vehicle(&clio.id).await.unwrap().unwrap();
        assert!(first.id > 0);
        assert!(second.id > 0);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn delete_for_vehicle_is_silent_when_absent() {
        let repos = InMemoryRepositoryProvider::new();
        assert!(repos.statuses().delete_for_vehicle("missing").await.is_ok());
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let repos = InMemoryRepositoryProvider::new();
        let err = repos
            .brands()
            .update(Brand::new("Ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
