//! Repositorios
//!
//! Acceso a los datos de inventario.

pub mod vehicle_repository;

pub use vehicle_repository::{InMemoryVehicleRepository, InventoryRepository, PgVehicleRepository};
