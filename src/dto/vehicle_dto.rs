use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::catalog_query::{CatalogFilters, QueryDescriptor, SortKey};
use crate::models::vehicle::{VehicleCondition, VehicleRecord, VehicleStatus};
use crate::services::result_shaper::ShapedVehicle;

pub const DEFAULT_PAGE_SIZE: u32 = 24;

// Parámetros de `GET /api/vehicles`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VehicleListQuery {
    pub search: Option<String>,
    pub make: Option<String>,
    pub price_range: Option<String>,
    pub condition: Option<String>,
    pub sort: Option<String>,

    #[validate(range(min = 1))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<u32>,
}

impl VehicleListQuery {
    pub fn descriptor(&self) -> QueryDescriptor {
        QueryDescriptor {
            search_term: self.search.clone(),
            filters: CatalogFilters {
                make: self.make.clone(),
                price_range: self.price_range.clone(),
                condition: self.condition.clone(),
            },
            sort_key: self.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

// Tarjeta de vehículo para los listados
#[derive(Debug, Clone, Serialize)]
pub struct VehicleCardResponse {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub primary_image: String,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub price: Option<Decimal>,
    pub mileage: Option<i64>,
    pub condition: Option<VehicleCondition>,
    pub location: Option<String>,
    pub status: VehicleStatus,
}

impl VehicleCardResponse {
    pub fn new(vehicle: &VehicleRecord, shaped: ShapedVehicle) -> Self {
        Self {
            id: vehicle.id.clone(),
            title: shaped.title,
            subtitle: shaped.subtitle,
            primary_image: shaped.primary_image,
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            price: vehicle.price,
            mileage: vehicle.mileage,
            condition: vehicle.condition,
            location: vehicle.location.clone(),
            status: vehicle.status,
        }
    }
}

// Detalle de vehículo: el registro completo más los campos derivados
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDetailResponse {
    #[serde(flatten)]
    pub vehicle: VehicleRecord,
    #[serde(flatten)]
    pub shaped: ShapedVehicle,
}

// Página de resultados
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: usize, page: u32, page_size: u32) -> Self {
        let total_pages = total.div_ceil(page_size.max(1) as usize) as u32;
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}
