//! Fleet data importer
//!
//! Reconciles delimited vehicle data against the brand / model / vehicle
//! stores. Parents (brand, model) are created lazily on first reference and
//! never updated on a hit; vehicles are deduplicated on their external id;
//! every failure is contained at row granularity, so one bad row never
//! aborts the run and the importer always comes back with a summary.
//!
//! Rows are processed strictly in order and every store call is awaited
//! before the next one starts. There is no transaction around a row: a brand
//! or model created for a row whose vehicle creation later fails stays
//! persisted, and its counter stays incremented.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::fields::VehicleRecord;
use super::parser;
use crate::domain::{
    Brand, DomainResult, RepositoryProvider, Vehicle, VehicleModel, VehicleStatus,
};

/// Counters describing the effects of one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub brands_created: u32,
    pub models_created: u32,
    pub vehicles_created: u32,
    pub vehicles_skipped: u32,
}

/// Batch importer over the domain repositories.
pub struct FleetImporter {
    repos: Arc<dyn RepositoryProvider>,
}

impl FleetImporter {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Import a whole delimited text blob and return the effect counters.
    ///
    /// Never errors: rows that cannot be resolved or whose store operations
    /// fail are logged and counted as skipped.
    pub async fn import_csv(&self, input: &str) -> ImportSummary {
        let rows = parser::parse_rows(input);
        let mut summary = ImportSummary::default();

        for (index, row) in rows.iter().enumerate() {
            let line = index + 2; // 1-based, after the header line
            let Some(record) = VehicleRecord::resolve(row) else {
                warn!("row {line}: missing brand or model name, skipping");
                summary.vehicles_skipped += 1;
                continue;
            };
            if let Err(e) = self.import_record(&record, &mut summary).await {
                warn!("row {line}: {e}, skipping");
                summary.vehicles_skipped += 1;
            }
        }

        info!(
            "import finished: {} brands, {} models, {} vehicles created, {} rows skipped",
            summary.brands_created,
            summary.models_created,
            summary.vehicles_created,
            summary.vehicles_skipped
        );
        summary
    }

    async fn import_record(
        &self,
        record: &VehicleRecord,
        summary: &mut ImportSummary,
    ) -> DomainResult<()> {
        let brand = self.resolve_or_create_brand(&record.brand_name, summary).await?;
        let model = self.resolve_or_create_model(record, &brand, summary).await?;

        // Dedup on external id. Blank ids cannot be deduplicated and always
        // produce a fresh vehicle. Note the brand/model resolution above has
        // already happened, so a duplicate row can still have created a new
        // brand or model.
        if !record.external_id.is_empty() {
            let existing = self
                .repos
                .vehicles()
                .find_by_external_id(&record.external_id)
                .await?;
            if existing.is_some() {
                warn!(
                    "skipping duplicate vehicle with external id {}",
                    record.external_id
                );
                summary.vehicles_skipped += 1;
                return Ok(());
            }
        }

        let external_id = (!record.external_id.is_empty()).then(|| record.external_id.clone());
        let name = format!("{} {}", brand.name, model.name);
        let vehicle = self
            .repos
            .vehicles()
            .save(Vehicle::new(external_id, name, &brand.id, &model.id))
            .await?;

        let status = VehicleStatus::new(
            &vehicle.id,
            record.current_charge_level,
            &record.status,
        );
        self.repos.statuses().save(status).await?;
        summary.vehicles_created += 1;
        Ok(())
    }

    /// Lookup by exact name, create lazily when absent. An existing brand is
    /// returned as-is even when the incoming row differs.
    async fn resolve_or_create_brand(
        &self,
        name: &str,
        summary: &mut ImportSummary,
    ) -> DomainResult<Brand> {
        if let Some(brand) = self.repos.brands().find_by_name(name).await? {
            return Ok(brand);
        }
        let brand = self.repos.brands().save(Brand::new(name)).await?;
        summary.brands_created += 1;
        Ok(brand)
    }

    /// Lookup keyed on (name, brand) only. First writer wins permanently:
    /// attributes of an existing model are never overwritten by later rows.
    async fn resolve_or_create_model(
        &self,
        record: &VehicleRecord,
        brand: &Brand,
        summary: &mut ImportSummary,
    ) -> DomainResult<VehicleModel> {
        if let Some(model) = self
            .repos
            .models()
            .find_by_name_and_brand(&record.model_name, &brand.id)
            .await?
        {
            return Ok(model);
        }
        let model = self
            .repos
            .models()
            .save(VehicleModel::new(
                &record.model_name,
                &brand.id,
                record.battery_capacity,
                record.average_consumption,
                record.emission_gco2,
                record.powertrain,
            ))
            .await?;
        summary.models_created += 1;
        Ok(model)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::{DomainError, Powertrain, VehicleFilter, VehicleRepository};
    use crate::infrastructure::storage::{
        InMemoryBrandRepository, InMemoryModelRepository, InMemoryRepositoryProvider,
        InMemoryStatusRepository, InMemoryVehicleRepository,
    };

    const HEADER: &str = "ID,Brand,Model,Battery capacity (kWh),Current charge level (%),Status,Average energy consumption (kWh/100km or L/100km),Type,Emission_gco2_km";

    fn importer() -> (FleetImporter, Arc<InMemoryRepositoryProvider>) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        (FleetImporter::new(repos.clone()), repos)
    }

    fn csv(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[tokio::test]
    async fn empty_input_yields_zero_summary() {
        let (importer, _) = importer();
        let summary = importer.import_csv("").await;
        assert_eq!(summary, ImportSummary::default());
    }

    #[tokio::test]
    async fn single_row_creates_brand_model_vehicle_and_status() {
        let (importer, repos) = importer();
        let summary = importer
            .import_csv(&csv(&["ext-1,Acme,ModelX,50,80,available,15,BEV,0"]))
            .await;

        assert_eq!(
            summary,
            ImportSummary {
                brands_created: 1,
                models_created: 1,
                vehicles_created: 1,
                vehicles_skipped: 0,
            }
        );

        let vehicle = repos
            .vehicles()
            .find_by_external_id("ext-1")
            .await
            .unwrap()
            .expect("vehicle stored");
        assert_eq!(vehicle.name, "Acme ModelX");

        let status = repos
            .statuses()
            .find_by_vehicle(&vehicle.id)
            .await
            .unwrap()
            .expect("status stored");
        assert_eq!(status.current_charge_level, 80.0);
        assert_eq!(status.status, "available");
    }

    #[tokio::test]
    async fn reimporting_the_same_row_only_skips() {
        let (importer, _) = importer();
        let row = "ext-1,Acme,ModelX,50,80,available,15,BEV,0";

        importer.import_csv(&csv(&[row])).await;
        let second = importer.import_csv(&csv(&[row])).await;

        assert_eq!(
            second,
            ImportSummary {
                brands_created: 0,
                models_created: 0,
                vehicles_created: 0,
                vehicles_skipped: 1,
            }
        );
    }

    #[tokio::test]
    async fn brand_is_reused_across_rows() {
        let (importer, repos) = importer();
        let summary = importer
            .import_csv(&csv(&[
                "ext-1,Acme,ModelX,50,80,available,15,BEV,0",
                "ext-2,Acme,ModelY,60,40,charging,14,BEV,0",
            ]))
            .await;

        assert_eq!(summary.brands_created, 1);
        assert_eq!(summary.models_created, 2);
        assert_eq!(summary.vehicles_created, 2);
        assert_eq!(repos.brands().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_model_name_under_two_brands_is_two_models() {
        let (importer, repos) = importer();
        let summary = importer
            .import_csv(&csv(&[
                "ext-1,Acme,Roadster,50,80,available,15,BEV,0",
                "ext-2,Zenith,Roadster,60,40,available,14,BEV,0",
            ]))
            .await;

        assert_eq!(summary.brands_created, 2);
        assert_eq!(summary.models_created, 2);
        assert_eq!(repos.models().find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn model_attributes_are_first_writer_wins() {
        let (importer, repos) = importer();
        importer
            .import_csv(&csv(&[
                "ext-1,Acme,ModelX,50,80,available,15,BEV,120",
                "ext-2,Acme,ModelX,99,40,available,20,BEV,300",
            ]))
            .await;

        let models = repos.models().find_all().await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].battery_capacity, 50);
        assert_eq!(models[0].average_consumption, 150.0);
        assert_eq!(models[0].emission_gco2, 120.0);
    }

    #[tokio::test]
    async fn duplicate_external_id_with_novel_brand_still_creates_the_brand() {
        let (importer, repos) = importer();
        importer
            .import_csv(&csv(&["ext-1,Acme,ModelX,50,80,available,15,BEV,0"]))
            .await;

        // same external id, but brand and model are new: parent side effects
        // land before the dedup check runs
        let second = importer
            .import_csv(&csv(&["ext-1,Zenith,Roadster,60,40,available,14,BEV,0"]))
            .await;

        assert_eq!(
            second,
            ImportSummary {
                brands_created: 1,
                models_created: 1,
                vehicles_created: 0,
                vehicles_skipped: 1,
            }
        );
        assert_eq!(repos.vehicles().find_all(&VehicleFilter::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bev_consumption_is_normalized_ice_is_not() {
        let (importer, repos) = importer();
        importer
            .import_csv(&csv(&[
                "ext-1,Acme,Sparky,50,80,available,15,BEV,0",
                "ext-2,Acme,Guzzler,0,0,available,15,ICE,180",
            ]))
            .await;

        let models = repos.models().find_all().await.unwrap();
        let sparky = models.iter().find(|m| m.name == "Sparky").unwrap();
        let guzzler = models.iter().find(|m| m.name == "Guzzler").unwrap();
        assert_eq!(sparky.average_consumption, 150.0);
        assert_eq!(sparky.powertrain, Powertrain::Bev);
        assert_eq!(guzzler.average_consumption, 15.0);
        assert_eq!(guzzler.powertrain, Powertrain::Ice);
    }

    #[tokio::test]
    async fn missing_required_field_never_reaches_the_store() {
        let (importer, repos) = importer();
        let summary = importer
            .import_csv(&csv(&[
                ",,ModelX,50,80,available,15,BEV,0",
                "ext-2,Acme,,50,80,available,15,BEV,0",
            ]))
            .await;

        assert_eq!(summary.vehicles_skipped, 2);
        assert_eq!(summary.brands_created, 0);
        assert!(repos.brands().find_all().await.unwrap().is_empty());
        assert!(repos.models().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn surplus_comma_in_last_column_does_not_abort_the_row() {
        let (importer, _) = importer();
        let summary = importer
            .import_csv(&csv(&["ext-1,Acme,ModelX,50,80,available,15,BEV,0,junk"]))
            .await;

        // trailing content merges into the emission column, which then
        // fails to parse and degrades to 0
        assert_eq!(summary.vehicles_created, 1);
        assert_eq!(summary.vehicles_skipped, 0);
    }

    #[tokio::test]
    async fn blank_external_ids_always_create_new_vehicles() {
        let (importer, repos) = importer();
        let summary = importer
            .import_csv(&csv(&[
                ",Acme,ModelX,50,80,available,15,BEV,0",
                ",Acme,ModelX,50,60,charging,15,BEV,0",
            ]))
            .await;

        assert_eq!(summary.vehicles_created, 2);
        let vehicles = repos.vehicles().find_all(&VehicleFilter::default()).await.unwrap();
        assert_eq!(vehicles.len(), 2);
        assert!(vehicles.iter().all(|v| v.external_id.is_none()));
    }

    // ── Row-level failure containment ──────────────────────────

    struct FlakyVehicleRepository {
        inner: InMemoryVehicleRepository,
        fail_external_id: String,
    }

    #[async_trait]
    impl VehicleRepository for FlakyVehicleRepository {
        async fn find_by_id(&self, id: &str) -> DomainResult<Option<Vehicle>> {
            self.inner.find_by_id(id).await
        }

        async fn find_by_external_id(&self, external_id: &str) -> DomainResult<Option<Vehicle>> {
            self.inner.find_by_external_id(external_id).await
        }

        async fn find_all(&self, filter: &VehicleFilter) -> DomainResult<Vec<Vehicle>> {
            self.inner.find_all(filter).await
        }

        async fn save(&self, vehicle: Vehicle) -> DomainResult<Vehicle> {
            if vehicle.external_id.as_deref() == Some(self.fail_external_id.as_str()) {
                return Err(DomainError::Storage("injected save failure".into()));
            }
            self.inner.save(vehicle).await
        }

        async fn update(&self, vehicle: Vehicle) -> DomainResult<()> {
            self.inner.update(vehicle).await
        }

        async fn delete(&self, id: &str) -> DomainResult<()> {
            self.inner.delete(id).await
        }
    }

    struct FlakyProvider {
        brands: InMemoryBrandRepository,
        models: InMemoryModelRepository,
        vehicles: FlakyVehicleRepository,
        statuses: InMemoryStatusRepository,
    }

    impl FlakyProvider {
        fn new(fail_external_id: &str) -> Self {
            let statuses = InMemoryStatusRepository::new();
            let vehicles = InMemoryVehicleRepository::new(statuses.rows_handle());
            Self {
                brands: InMemoryBrandRepository::new(),
                models: InMemoryModelRepository::new(),
                vehicles: FlakyVehicleRepository {
                    inner: vehicles,
                    fail_external_id: fail_external_id.to_string(),
                },
                statuses,
            }
        }
    }

    impl RepositoryProvider for FlakyProvider {
        fn brands(&self) -> &dyn crate::domain::BrandRepository {
            &self.brands
        }
        fn models(&self) -> &dyn crate::domain::ModelRepository {
            &self.models
        }
        fn vehicles(&self) -> &dyn VehicleRepository {
            &self.vehicles
        }
        fn statuses(&self) -> &dyn crate::domain::VehicleStatusRepository {
            &self.statuses
        }
    }

    #[tokio::test]
    async fn store_failure_in_one_row_leaves_the_others_intact() {
        let repos = Arc::new(FlakyProvider::new("ext-3"));
        let importer = FleetImporter::new(repos.clone());

        let summary = importer
            .import_csv(&csv(&[
                "ext-1,Acme,ModelX,50,80,available,15,BEV,0",
                "ext-2,Acme,ModelX,50,70,available,15,BEV,0",
                "ext-3,Acme,ModelX,50,60,available,15,BEV,0",
                "ext-4,Acme,ModelX,50,50,available,15,BEV,0",
                "ext-5,Acme,ModelX,50,40,available,15,BEV,0",
            ]))
            .await;

        assert_eq!(
            summary,
            ImportSummary {
                brands_created: 1,
                models_created: 1,
                vehicles_created: 4,
                vehicles_skipped: 1,
            }
        );
        assert!(repos
            .vehicles()
            .find_by_external_id("ext-3")
            .await
            .unwrap()
            .is_none());
        assert!(repos
            .vehicles()
            .find_by_external_id("ext-4")
            .await
            .unwrap()
            .is_some());
    }

    // ── Example scenario from the import contract ──────────────

    #[tokio::test]
    async fn example_scenario_first_and_second_pass() {
        let (importer, repos) = importer();
        let row = "ext-1,Acme,ModelX,50,80,available,15,BEV,0";

        let first = importer.import_csv(&csv(&[row])).await;
        assert_eq!(
            first,
            ImportSummary {
                brands_created: 1,
                models_created: 1,
                vehicles_created: 1,
                vehicles_skipped: 0,
            }
        );

        let models = repos.models().find_all().await.unwrap();
        assert_eq!(models[0].average_consumption, 150.0);

        let second = importer.import_csv(&csv(&[row])).await;
        assert_eq!(
            second,
            ImportSummary {
                brands_created: 0,
                models_created: 0,
                vehicles_created: 0,
                vehicles_skipped: 1,
            }
        );
    }
}
