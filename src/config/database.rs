//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de PostgreSQL con SQLx.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }

    /// Aplicar `DB_MAX_CONNECTIONS` si está definida
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(raw) = env::var("DB_MAX_CONNECTIONS") {
            self.max_connections = raw
                .trim()
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid number, got '{}'", raw))?;
        }
        self.min_connections = self.min_connections.min(self.max_connections);
        Ok(self)
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool> {
        info!("🗄️ Conectando a PostgreSQL: {}", mask_database_url(&self.url));

        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
            .context("could not connect to the inventory database")?;

        Ok(pool)
    }
}

/// Enmascarar las credenciales de la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let rest = &url[scheme_end + 3..];

    match rest.rfind('@') {
        Some(at_pos) => format!("{}***:***@{}", &url[..scheme_end + 3], &rest[at_pos + 1..]),
        None => url.to_string(),
    }
}
