use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::vehicle_dto::{
    PaginatedResponse, VehicleCardResponse, VehicleDetailResponse, VehicleListQuery,
};
use crate::repositories::InventoryRepository;
use crate::services::catalog_facets::{facets, CatalogFacets};
use crate::services::catalog_query_service::query;
use crate::services::result_shaper::ResultShaper;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: Arc<dyn InventoryRepository>,
    shaper: ResultShaper,
    inventory_page_size: u32,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: state.repository.clone(),
            shaper: state.shaper.clone(),
            inventory_page_size: state.inventory_page_size,
        }
    }

    /// Listado: inventario completo -> motor de consultas -> página de tarjetas
    pub async fn list(
        &self,
        params: VehicleListQuery,
    ) -> Result<PaginatedResponse<VehicleCardResponse>, AppError> {
        params.validate()?;

        let descriptor = params.descriptor();
        let page = params.page();
        let page_size = params.page_size();

        let inventory = self.repository.fetch_all_vehicles(self.inventory_page_size).await?;
        let results = query(&inventory, &descriptor);
        let total = results.len();

        let items = results
            .into_iter()
            .skip((page as usize - 1) * page_size as usize)
            .take(page_size as usize)
            .map(|vehicle| VehicleCardResponse::new(vehicle, self.shaper.shape(vehicle)))
            .collect();

        info!(
            "🚗 Listado: {} resultados (página {}, orden {})",
            total, page, descriptor.sort_key
        );

        Ok(PaginatedResponse::new(items, total, page, page_size))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self.repository.fetch_vehicle_by_id(id).await?;
        let shaped = self.shaper.shape(&vehicle);

        Ok(VehicleDetailResponse { vehicle, shaped })
    }

    pub async fn filters(&self) -> Result<CatalogFacets, AppError> {
        let inventory = self.repository.fetch_all_vehicles(self.inventory_page_size).await?;
        Ok(facets(&inventory))
    }
}
