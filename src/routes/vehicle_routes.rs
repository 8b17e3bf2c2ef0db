use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    PaginatedResponse, VehicleCardResponse, VehicleDetailResponse, VehicleListQuery,
};
use crate::services::catalog_facets::CatalogFacets;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/filters", get(get_filters))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleListQuery>,
) -> Result<Json<PaginatedResponse<VehicleCardResponse>>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn get_filters(State(state): State<AppState>) -> Result<Json<CatalogFacets>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.filters().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}
