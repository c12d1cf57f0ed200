use serde::{Deserialize, Serialize};

use crate::models::{FilterRecord, Vehicle};

// Request de búsqueda en lenguaje natural
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

// Response de búsqueda
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub vehicles: Vec<Vehicle>,
    pub filters: FilterRecord,
    pub count: usize,
}

// Request de comparación: ids explícitos y/o texto libre ("Camry vs RAV4")
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub vehicle1: Option<String>,
    #[serde(default)]
    pub vehicle2: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

// Diferencias con signo: vehicle2 - vehicle1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Differences {
    pub price: i64,
    pub mpg: f64,
    pub horsepower: i64,
}

// Response de comparación
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub vehicle1: Vehicle,
    pub vehicle2: Vehicle,
    pub differences: Differences,
    pub similarities: Vec<String>,
}

// Sugerencia cuando no se pudo resolver la comparación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleSuggestion {
    pub id: String,
    pub name: String,
}

impl From<&Vehicle> for VehicleSuggestion {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.clone(),
            name: vehicle.display_name(),
        }
    }
}
