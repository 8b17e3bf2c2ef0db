//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::InventoryRepository;
use crate::services::result_shaper::ResultShaper;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn InventoryRepository>,
    pub shaper: ResultShaper,
    /// Tamaño de página con el que se carga el inventario completo
    pub inventory_page_size: u32,
}

impl AppState {
    pub fn new(repository: Arc<dyn InventoryRepository>, config: &EnvironmentConfig) -> Self {
        Self {
            repository,
            shaper: ResultShaper::new(config.placeholder_image_url.clone()),
            inventory_page_size: config.inventory_page_size,
        }
    }

    pub fn with_defaults(repository: Arc<dyn InventoryRepository>) -> Self {
        Self {
            repository,
            shaper: ResultShaper::default(),
            inventory_page_size: 200,
        }
    }
}
