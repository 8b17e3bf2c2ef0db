//! Controladores
//!
//! Orquestan repositorio, motor de consultas y shaping para cada endpoint.

pub mod vehicle_controller;

pub use vehicle_controller::VehicleController;
