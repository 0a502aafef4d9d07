pub mod model;
pub mod repository;

pub use model::{Powertrain, VehicleModel};
pub use repository::ModelRepository;
