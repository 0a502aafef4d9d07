//! Application layer: use cases built on the domain repositories

pub mod import;

pub use import::{FleetImporter, ImportSummary};
