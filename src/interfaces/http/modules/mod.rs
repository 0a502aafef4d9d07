//! Per-resource API modules

pub mod analytics;
pub mod brands;
pub mod health;
pub mod import;
pub mod models;
pub mod vehicles;

use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::application::FleetImporter;
use crate::domain::RepositoryProvider;

/// Shared state for all API routes.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub db: DatabaseConnection,
    pub importer: Arc<FleetImporter>,
    /// File imported by the seed endpoint
    pub seed_path: PathBuf,
}
