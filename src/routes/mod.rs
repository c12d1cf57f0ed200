//! Rutas HTTP
//!
//! Cada recurso expone su propio `Router<AppState>`; `create_app` los monta
//! bajo `/api` junto con los endpoints sueltos y las capas comunes.

pub mod chat_routes;
pub mod configuration_routes;
pub mod dealer_routes;
pub mod finance_routes;
pub mod vehicle_routes;

use axum::{
    body::Bytes,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo de la aplicación con estado y middleware
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .route("/api/compare", post(vehicle_routes::compare_vehicles))
        .nest("/api/dealers", dealer_routes::create_dealer_router())
        .route("/api/request-offers", post(dealer_routes::request_offers))
        .route("/api/chat", post(chat_routes::chat))
        .route("/api/calculate-payment", post(finance_routes::calculate_payment))
        .nest("/api/finance", finance_routes::create_finance_router())
        .nest("/api/configurations", configuration_routes::create_configuration_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Cuerpo JSON opcional: vacío (o sin Content-Type) equivale a `{}`
pub(crate) fn json_or_default<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
