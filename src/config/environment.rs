//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto salvo el origen del
//! inventario (`DATABASE_URL` o `INVENTORY_SEED_FILE`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::services::result_shaper::DEFAULT_PLACEHOLDER_IMAGE;

/// De dónde sale el inventario
#[derive(Debug, Clone, PartialEq)]
pub enum InventorySource {
    Postgres { database_url: String },
    SeedFile(PathBuf),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub placeholder_image_url: String,
    pub inventory_page_size: u32,
    pub inventory_source: InventorySource,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración a partir de una función de lectura
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let inventory_source = match (var("INVENTORY_SEED_FILE"), var("DATABASE_URL")) {
            (Some(path), _) => InventorySource::SeedFile(PathBuf::from(path)),
            (None, Some(database_url)) => InventorySource::Postgres { database_url },
            (None, None) => {
                return Err(anyhow!("DATABASE_URL or INVENTORY_SEED_FILE must be set"));
            }
        };

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(var("PORT"), "PORT", 3000)?,
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            placeholder_image_url: var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_IMAGE.to_string()),
            inventory_page_size: parse_or(var("INVENTORY_PAGE_SIZE"), "INVENTORY_PAGE_SIZE", 200)?,
            inventory_source,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got '{}'", key, raw)),
        None => Ok(default),
    }
}
