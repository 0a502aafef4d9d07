//! HTTP REST API interfaces
//!
//! - `common`: response envelope and validated JSON extractor
//! - `modules`: per-resource DTOs and handlers
//! - `router`: API router wiring everything together

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
