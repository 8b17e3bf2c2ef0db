//! Catálogo de vehículos del marketplace de importación
//!
//! Motor de consultas (búsqueda, filtros, orden y shaping) sobre el
//! inventario, más el servicio HTTP de solo lectura que lo expone.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
