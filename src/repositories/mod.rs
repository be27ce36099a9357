//! Repositorios de acceso a datos

pub mod vehicle_repository;
pub mod view_count_repository;

pub use vehicle_repository::{VehicleRepository, VehicleStore};
pub use view_count_repository::{ViewCountRepository, ViewCountStore};
