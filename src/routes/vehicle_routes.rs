use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CompareRequest, ComparisonResponse, SearchRequest, SearchResponse};
use crate::models::Vehicle;
use crate::routes::json_or_default;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/search", post(search_vehicles))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    let controller = VehicleController::new(state.catalog.clone());
    Json(controller.list())
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.catalog.clone());
    let vehicle = controller.get_by_id(&id)?;
    Ok(Json(vehicle))
}

async fn search_vehicles(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchResponse>, AppError> {
    let request: SearchRequest = json_or_default(&body)?;
    let controller = VehicleController::new(state.catalog.clone());
    Ok(Json(controller.search(request)))
}

pub async fn compare_vehicles(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ComparisonResponse>, AppError> {
    let request: CompareRequest = json_or_default(&body)?;
    let controller = VehicleController::new(state.catalog.clone());
    let comparison = controller.compare(request)?;
    Ok(Json(comparison))
}
