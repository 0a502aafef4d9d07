//! # Beev Fleet Service
//!
//! REST backend for managing a mixed BEV/ICE vehicle fleet: brands, models,
//! vehicles with operational status, aggregated fleet analytics and a
//! tolerant batch importer for delimited vehicle data.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities and repository traits
//! - **application**: Use cases, most notably the fleet data importer
//! - **infrastructure**: External concerns (database, in-memory storage)
//! - **interfaces**: REST API (axum handlers, DTOs, router)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export the importer and API router
pub use application::{FleetImporter, ImportSummary};
pub use interfaces::http::create_api_router;
