use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::configuration_controller::ConfigurationController;
use crate::dto::configuration_dto::CreateConfigurationRequest;
use crate::models::FinanceConfiguration;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_configuration_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_configurations).post(create_configuration))
        .route("/:id", delete(delete_configuration))
}

async fn list_configurations(
    State(state): State<AppState>,
) -> Result<Json<Vec<FinanceConfiguration>>, AppError> {
    let controller = ConfigurationController::new(state.configurations.clone());
    Ok(Json(controller.list().await?))
}

async fn create_configuration(
    State(state): State<AppState>,
    Json(request): Json<CreateConfigurationRequest>,
) -> Result<(StatusCode, Json<FinanceConfiguration>), AppError> {
    let controller = ConfigurationController::new(state.configurations.clone());
    let config = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(config)))
}

async fn delete_configuration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ConfigurationController::new(state.configurations.clone());
    controller.delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Configuration deleted"
    })))
}
