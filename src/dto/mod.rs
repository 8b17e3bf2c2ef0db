//! DTOs de la API
//!
//! Parámetros de entrada y respuestas JSON del catálogo.

pub mod vehicle_dto;
