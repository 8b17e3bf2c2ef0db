//! Modelo de Vehicle
//!
//! Este módulo contiene el registro canónico de un vehículo del catálogo
//! (`VehicleRecord`) y la fila de PostgreSQL de la que se construye.
//! Todos los campos opcionales son `Option<T>`: quien consume el registro
//! está obligado a tratar la ausencia de forma explícita.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_non_negative, validate_not_empty};

/// Estado de conservación del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl VehicleCondition {
    pub const ALL: [VehicleCondition; 4] = [
        VehicleCondition::Excellent,
        VehicleCondition::Good,
        VehicleCondition::Fair,
        VehicleCondition::Poor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCondition::Excellent => "excellent",
            VehicleCondition::Good => "good",
            VehicleCondition::Fair => "fair",
            VehicleCondition::Poor => "poor",
        }
    }
}

impl fmt::Display for VehicleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(VehicleCondition::Excellent),
            "good" => Ok(VehicleCondition::Good),
            "fair" => Ok(VehicleCondition::Fair),
            "poor" => Ok(VehicleCondition::Poor),
            other => Err(format!("unknown vehicle condition '{}'", other)),
        }
    }
}

/// Estado comercial del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Available,
    Sold,
    Sourcing,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Sold => "sold",
            VehicleStatus::Sourcing => "sourcing",
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(VehicleStatus::Available),
            "sold" => Ok(VehicleStatus::Sold),
            "sourcing" => Ok(VehicleStatus::Sourcing),
            other => Err(format!("unknown vehicle status '{}'", other)),
        }
    }
}

/// Registro de vehículo - la unidad sobre la que trabaja el motor del catálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VehicleRecord {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(custom = "validate_not_empty")]
    pub make: String,
    #[validate(custom = "validate_not_empty")]
    pub model: String,
    #[serde(default)]
    pub trim: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1000, max = 9999))]
    pub year: Option<i32>,

    /// `None` significa "precio a consultar"
    #[serde(default)]
    #[validate(custom = "validate_non_negative")]
    pub price: Option<Decimal>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub mileage: Option<i64>,

    #[serde(default)]
    pub condition: Option<VehicleCondition>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: VehicleStatus,
}

impl VehicleRecord {
    /// Registro mínimo: solo los campos obligatorios
    pub fn new(id: impl Into<String>, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            trim: None,
            year: None,
            price: None,
            mileage: None,
            condition: None,
            body_type: None,
            transmission: None,
            fuel_type: None,
            location: None,
            images: Vec::new(),
            created_at: None,
            status: VehicleStatus::Available,
        }
    }
}

/// Fila de la tabla `vehicles`
#[derive(Debug, Clone, FromRow)]
pub struct VehicleRow {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub year: Option<i32>,
    pub price: Option<Decimal>,
    pub mileage: Option<i64>,
    pub condition: Option<String>,
    pub body_type: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub location: Option<String>,
    pub images: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub status: String,
}

impl From<VehicleRow> for VehicleRecord {
    fn from(row: VehicleRow) -> Self {
        let id = row.id.to_string();

        // Una condición desconocida se trata como ausente
        let condition = row.condition.as_deref().and_then(|c| match c.parse() {
            Ok(condition) => Some(condition),
            Err(e) => {
                warn!("⚠️ Vehículo {}: {}, se ignora", id, e);
                None
            }
        });

        let status = row.status.parse().unwrap_or_else(|e| {
            warn!("⚠️ Vehículo {}: {}, se usa 'available'", id, e);
            VehicleStatus::Available
        });

        Self {
            id,
            make: row.make,
            model: row.model,
            trim: row.trim,
            year: row.year,
            price: row.price,
            mileage: row.mileage,
            condition,
            body_type: row.body_type,
            transmission: row.transmission,
            fuel_type: row.fuel_type,
            location: row.location,
            images: row.images.unwrap_or_default(),
            created_at: row.created_at,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> VehicleRow {
        VehicleRow {
            id: Uuid::new_v4(),
            make: "Toyota".to_string(),
            model: "Land Cruiser".to_string(),
            trim: None,
            year: Some(2019),
            price: Some(Decimal::from(42000)),
            mileage: Some(61000),
            condition: Some("Excellent".to_string()),
            body_type: None,
            transmission: None,
            fuel_type: None,
            location: None,
            images: None,
            created_at: None,
            status: "sold".to_string(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let record = VehicleRecord::from(row());
        assert_eq!(record.condition, Some(VehicleCondition::Excellent));
        assert_eq!(record.status, VehicleStatus::Sold);
        assert!(record.images.is_empty());
    }

    #[test]
    fn test_row_conversion_unknown_values() {
        let mut row = row();
        row.condition = Some("mint".to_string());
        row.status = "archived".to_string();

        let record = VehicleRecord::from(row);
        assert_eq!(record.condition, None);
        assert_eq!(record.status, VehicleStatus::Available);
    }

    #[test]
    fn test_record_validation() {
        let mut record = VehicleRecord::new("v1", "BMW", "X5");
        assert!(record.validate().is_ok());

        record.year = Some(95);
        assert!(record.validate().is_err());

        record.year = Some(1995);
        record.price = Some(Decimal::from(-1));
        assert!(record.validate().is_err());

        record.price = Some(Decimal::ZERO);
        record.mileage = Some(-10);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let record: VehicleRecord = serde_json::from_str(
            r#"{"id": "v1", "make": "Honda", "model": "Civic", "condition": "fair", "price": 12500}"#,
        )
        .unwrap();

        assert_eq!(record.condition, Some(VehicleCondition::Fair));
        assert_eq!(record.price, Some(Decimal::from(12500)));
        assert_eq!(record.status, VehicleStatus::Available);
        assert_eq!(record.created_at, None);
    }
}
