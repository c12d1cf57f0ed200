//! Utilidades de validación
//!
//! Validadores personalizados para los DTOs (`validator`) y conversión de
//! identificadores recibidos en la ruta.

use uuid::Uuid;
use validator::ValidationError;

use crate::utils::errors::{bad_request_error, AppError};

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Convertir el id de la ruta a UUID; un id mal formado es un 400
pub fn parse_uuid(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| bad_request_error(&format!("Invalid identifier: {}", value)))
}
