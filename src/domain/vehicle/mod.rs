pub mod model;
pub mod repository;

pub use model::{status_token, Vehicle, VehicleFilter, VehicleStatus};
pub use repository::{VehicleRepository, VehicleStatusRepository};
