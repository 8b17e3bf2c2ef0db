//! Modelos del sistema
//!
//! Este módulo contiene el registro de vehículo y el descriptor de consulta
//! del catálogo.

pub mod catalog_query;
pub mod vehicle;

pub use catalog_query::{CatalogFilters, PriceRange, QueryDescriptor, SortKey};
pub use vehicle::{VehicleCondition, VehicleRecord, VehicleStatus};
