//! Búsqueda de texto libre
//!
//! Coincidencia por subcadena, sin distinguir mayúsculas, sobre la marca,
//! el modelo y el título derivado del vehículo.

use crate::models::vehicle::VehicleRecord;
use crate::services::result_shaper::display_title;

/// Un término vacío o ausente coincide con todos los vehículos
pub fn matches_search(record: &VehicleRecord, term: Option<&str>) -> bool {
    let term = match term.map(str::trim) {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return true,
    };

    record.make.to_lowercase().contains(&term)
        || record.model.to_lowercase().contains(&term)
        || display_title(record).to_lowercase().contains(&term)
}
