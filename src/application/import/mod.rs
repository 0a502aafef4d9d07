//! Fleet data import
//!
//! Turns a delimited text blob into brand / model / vehicle rows:
//!
//! - `parser`: raw text → header-keyed row records
//! - `fields`: row records → typed, defaulted vehicle records
//! - `importer`: reconciliation against the stores (lazy parent creation,
//!   vehicle dedup on external id, row-level failure containment)

pub mod fields;
pub mod importer;
pub mod parser;

pub use fields::VehicleRecord;
pub use importer::{FleetImporter, ImportSummary};
pub use parser::{parse_rows, RowRecord};
