//! Filtros estructurados extraídos de una consulta en lenguaje natural
//!
//! Todos los campos son opcionales: `None` significa "sin restricción" en esa dimensión.
//! Se serializan siempre (como `null`) para que el frontend vea el registro completo.

use serde::{Deserialize, Serialize};

use super::vehicle::{Drivetrain, FuelType};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterRecord {
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub drivetrain: Option<Drivetrain>,
    pub fuel_type: Option<FuelType>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_mpg: Option<u32>,
    pub make: Option<String>,
    pub model: Option<String>,
}

impl FilterRecord {
    /// true si ninguna dimensión tiene restricción
    pub fn is_empty(&self) -> bool {
        self == &FilterRecord::default()
    }
}
