//! Result shaper
//!
//! Campos derivados para presentación (título, subtítulo, imagen principal).
//! Funciones puras sobre un único registro: nunca fallan por campos
//! opcionales ausentes.

use serde::Serialize;

use crate::models::vehicle::VehicleRecord;

/// Imagen por defecto cuando no se configura `PLACEHOLDER_IMAGE_URL`
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/images/vehicle-placeholder.jpg";

pub const SUBTITLE_SEPARATOR: &str = " • ";

/// Campos de presentación de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedVehicle {
    pub title: String,
    pub subtitle: String,
    pub primary_image: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Año + marca + modelo + versión, separados por espacios
pub fn display_title(record: &VehicleRecord) -> String {
    let year = record.year.map(|y| y.to_string());

    [
        year.as_deref(),
        Some(record.make.trim()),
        Some(record.model.trim()),
        present(&record.trim),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Carrocería, transmisión y combustible
pub fn display_subtitle(record: &VehicleRecord) -> String {
    [
        present(&record.body_type),
        present(&record.transmission),
        present(&record.fuel_type),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(SUBTITLE_SEPARATOR)
}

pub fn primary_image<'a>(record: &'a VehicleRecord, placeholder: &'a str) -> &'a str {
    record
        .images
        .first()
        .map(String::as_str)
        .unwrap_or(placeholder)
}

/// Shaper configurado una sola vez con la imagen de respaldo
#[derive(Debug, Clone)]
pub struct ResultShaper {
    placeholder_image: String,
}

impl Default for ResultShaper {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE)
    }
}

impl ResultShaper {
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    pub fn shape(&self, record: &VehicleRecord) -> ShapedVehicle {
        ShapedVehicle {
            title: display_title(record),
            subtitle: display_subtitle(record),
            primary_image: primary_image(record, &self.placeholder_image).to_string(),
        }
    }
}
