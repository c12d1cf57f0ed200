//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::dto::vehicle_dto::VehicleSuggestion;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No se pudieron resolver los dos vehículos de una comparación
    #[error("Comparison unresolved: {message}")]
    ComparisonUnresolved {
        message: String,
        suggestions: Vec<VehicleSuggestion>,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<Vec<VehicleSuggestion>>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                tracing::warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        suggestions: None,
                        code: "VALIDATION_ERROR".to_string(),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::info!("🔍 Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: msg,
                        details: None,
                        suggestions: None,
                        code: "NOT_FOUND".to_string(),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: msg,
                        details: None,
                        suggestions: None,
                        code: "BAD_REQUEST".to_string(),
                    },
                )
            }

            AppError::ComparisonUnresolved { message, suggestions } => {
                tracing::info!("⚖️ Comparison unresolved, {} suggestions", suggestions.len());
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: message,
                        details: None,
                        suggestions: Some(suggestions),
                        code: "COMPARISON_UNRESOLVED".to_string(),
                    },
                )
            }

            AppError::Storage(msg) => {
                tracing::error!("❌ Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "An error occurred while accessing saved configurations".to_string(),
                        details: Some(json!({ "storage_error": msg })),
                        suggestions: None,
                        code: "STORAGE_ERROR".to_string(),
                    },
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        suggestions: None,
                        code: "INTERNAL_ERROR".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = not_found_error("Vehicle").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_comparison_unresolved_maps_to_400() {
        let error = AppError::ComparisonUnresolved {
            message: "no match".to_string(),
            suggestions: vec![],
        };
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_maps_to_500() {
        let response = AppError::Storage("disk full".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
