//! Storage implementations outside the database

pub mod memory;

pub use memory::{
    InMemoryBrandRepository, InMemoryModelRepository, InMemoryRepositoryProvider,
    InMemoryStatusRepository, InMemoryVehicleRepository,
};
