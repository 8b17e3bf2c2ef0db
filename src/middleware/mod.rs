//! Middleware
//!
//! Capas HTTP compartidas del servicio.

pub mod cors;

pub use cors::cors_for;
