//! Comparación de dos vehículos
//!
//! Resolución de los dos vehículos, en este orden:
//! 1. Texto libre partido por "vs" / "versus" / "compare(d) to" / "and": cada trozo
//!    se busca por modelo, marca o "marca modelo".
//! 2. Si no se resolvió ninguno, se filtra el catálogo con la consulta completa
//!    y se toman los dos primeros resultados.
//! 3. Los ids explícitos rellenan los huecos que queden.
//! Si sólo se resuelve uno, el otro queda sin resolver (no se adivina).

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::dto::vehicle_dto::{CompareRequest, ComparisonResponse, Differences, VehicleSuggestion};
use crate::models::Vehicle;
use crate::services::{query_parser, vehicle_filter};
use crate::utils::errors::AppError;

lazy_static! {
    static ref COMPARISON_SPLIT_REGEX: Regex = Regex::new(r"(?i)vs|versus|compared? to|and").unwrap();
}

/// Máximo de sugerencias cuando falla la comparación
pub const MAX_SUGGESTIONS: usize = 5;
/// Diferencia de precio por debajo de la cual se consideran "similares"
pub const SIMILAR_PRICE_THRESHOLD: i64 = 5_000;

pub const UNRESOLVED_MESSAGE: &str =
    "Could not find both vehicles to compare. Please specify vehicle names or IDs.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonError {
    #[error("{}", UNRESOLVED_MESSAGE)]
    BothVehiclesNotFound { suggestions: Vec<VehicleSuggestion> },
}

impl From<ComparisonError> for AppError {
    fn from(e: ComparisonError) -> Self {
        let message = e.to_string();
        match e {
            ComparisonError::BothVehiclesNotFound { suggestions } => {
                AppError::ComparisonUnresolved { message, suggestions }
            }
        }
    }
}

pub fn compare(
    vehicles: &[Vehicle],
    request: &CompareRequest,
) -> Result<ComparisonResponse, ComparisonError> {
    let (mut v1, mut v2) = match non_blank(request.query.as_deref()) {
        Some(query) => resolve_from_query(vehicles, query),
        None => (None, None),
    };

    if v1.is_none() {
        v1 = non_blank(request.vehicle1.as_deref()).and_then(|id| find_by_id(vehicles, id));
    }
    if v2.is_none() {
        v2 = non_blank(request.vehicle2.as_deref()).and_then(|id| find_by_id(vehicles, id));
    }

    match (v1, v2) {
        (Some(v1), Some(v2)) => Ok(build_comparison(v1, v2)),
        _ => {
            log::info!("⚖️ No se resolvieron ambos vehículos para comparar: {:?}", request);
            Err(ComparisonError::BothVehiclesNotFound {
                suggestions: suggestions(vehicles),
            })
        }
    }
}

/// Primeros vehículos del catálogo como sugerencia
pub fn suggestions(vehicles: &[Vehicle]) -> Vec<VehicleSuggestion> {
    vehicles
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(VehicleSuggestion::from)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolve_from_query<'a>(
    vehicles: &'a [Vehicle],
    query: &str,
) -> (Option<&'a Vehicle>, Option<&'a Vehicle>) {
    let lowered = query.to_lowercase();
    let segments: Vec<&str> = COMPARISON_SPLIT_REGEX.split(&lowered).collect();

    let (mut v1, mut v2) = (None, None);
    if segments.len() >= 2 {
        v1 = find_by_name(vehicles, segments[0].trim());
        v2 = find_by_name(vehicles, segments[1].trim());
    }

    if v1.is_none() && v2.is_none() {
        // sin ninguna restricción el filtro devolvería todo el catálogo
        let filters = query_parser::parse(query);
        if !filters.is_empty() {
            let matches = vehicle_filter::filter(vehicles, &filters);
            v1 = matches.first().copied();
            v2 = matches.get(1).copied();
        }
    }

    (v1, v2)
}

fn find_by_name<'a>(vehicles: &'a [Vehicle], name: &str) -> Option<&'a Vehicle> {
    if name.is_empty() {
        return None;
    }
    vehicles.iter().find(|v| {
        v.model.to_lowercase().contains(name)
            || v.make.to_lowercase().contains(name)
            || v.display_name().to_lowercase().contains(name)
    })
}

fn find_by_id<'a>(vehicles: &'a [Vehicle], id: &str) -> Option<&'a Vehicle> {
    let needle = id.to_lowercase();
    vehicles
        .iter()
        .find(|v| v.id == id || v.model.to_lowercase().contains(&needle))
}

fn build_comparison(v1: &Vehicle, v2: &Vehicle) -> ComparisonResponse {
    let differences = Differences {
        price: i64::from(v2.price) - i64::from(v1.price),
        mpg: v2.mpg - v1.mpg,
        horsepower: i64::from(v2.horsepower) - i64::from(v1.horsepower),
    };

    let mut similarities = Vec::new();
    if v1.vehicle_type == v2.vehicle_type {
        similarities.push("Same vehicle type".to_string());
    }
    if v1.drivetrain == v2.drivetrain {
        similarities.push("Same drivetrain".to_string());
    }
    if v1.fuel_type == v2.fuel_type {
        similarities.push("Same fuel type".to_string());
    }
    if differences.price.abs() < SIMILAR_PRICE_THRESHOLD {
        similarities.push("Similar price range".to_string());
    }

    ComparisonResponse {
        vehicle1: v1.clone(),
        vehicle2: v2.clone(),
        differences,
        similarities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::CatalogRepository;

    fn catalog() -> CatalogRepository {
        CatalogRepository::builtin().unwrap()
    }

    fn query(q: &str) -> CompareRequest {
        CompareRequest {
            query: Some(q.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_camry_vs_rav4() {
        let catalog = catalog();
        let result = compare(catalog.vehicles(), &query("Camry vs RAV4")).unwrap();

        assert!(result.vehicle1.model.to_lowercase().contains("camry"));
        assert!(result.vehicle2.model.to_lowercase().contains("rav4"));
        assert_ne!(result.vehicle1.id, result.vehicle2.id);
        assert_eq!(
            result.differences.price,
            i64::from(result.vehicle2.price) - i64::from(result.vehicle1.price)
        );
    }

    #[test]
    fn test_similarities_in_order() {
        let catalog = catalog();
        // Camry Hybrid LE (30000, Sedan, FWD, Hybrid) vs Accord Hybrid (32000, Sedan, FWD, Hybrid)
        let result = compare(catalog.vehicles(), &query("camry hybrid versus accord")).unwrap();
        assert_eq!(result.vehicle1.id, "camry-hybrid-2025-le");
        assert_eq!(result.vehicle2.id, "honda-accord-2025");
        assert_eq!(
            result.similarities,
            vec![
                "Same vehicle type",
                "Same drivetrain",
                "Same fuel type",
                "Similar price range"
            ]
        );
        assert_eq!(result.differences.price, 2000);
        assert_eq!(result.differences.mpg, -4.0);
        assert_eq!(result.differences.horsepower, 4);
    }

    #[test]
    fn test_unresolvable_names_fail_with_suggestions() {
        let catalog = catalog();
        let err = compare(catalog.vehicles(), &query("Zorblax vs Fooblat")).unwrap_err();
        let ComparisonError::BothVehiclesNotFound { suggestions } = err;
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert_eq!(suggestions[0].name, "Toyota Camry Hybrid LE");
    }

    #[test]
    fn test_explicit_ids() {
        let catalog = catalog();
        let request = CompareRequest {
            vehicle1: Some("prius-2025-le".to_string()),
            vehicle2: Some("explorer".to_string()),
            query: None,
        };
        let result = compare(catalog.vehicles(), &request).unwrap();
        assert_eq!(result.vehicle1.id, "prius-2025-le");
        assert_eq!(result.vehicle2.id, "ford-explorer-2025");
    }

    #[test]
    fn test_ids_fill_unresolved_slot() {
        let catalog = catalog();
        let request = CompareRequest {
            vehicle1: Some("tacoma-2025-trd".to_string()),
            vehicle2: Some("sequoia-2025-capstone".to_string()),
            query: Some("prius vs zorblax".to_string()),
        };
        let result = compare(catalog.vehicles(), &request).unwrap();
        // el texto resuelve el primero, el id rellena el segundo
        assert_eq!(result.vehicle1.id, "prius-2025-le");
        assert_eq!(result.vehicle2.id, "sequoia-2025-capstone");
    }

    #[test]
    fn test_and_inside_a_name_also_splits() {
        let catalog = catalog();
        // "highlander" contiene "and": el segundo trozo es "er", que vuelve a caer en Highlander
        let result = compare(catalog.vehicles(), &query("highlander vs explorer")).unwrap();
        assert_eq!(result.vehicle1.id, "highlander-2025-xle");
        assert_eq!(result.vehicle2.id, "highlander-2025-xle");
    }

    #[test]
    fn test_single_resolution_does_not_guess() {
        let catalog = catalog();
        assert!(compare(catalog.vehicles(), &query("prius vs zorblax")).is_err());
    }

    #[test]
    fn test_filter_fallback_takes_first_two_matches() {
        let catalog = catalog();
        let result = compare(catalog.vehicles(), &query("compare the 4WD ones")).unwrap();
        assert_eq!(result.vehicle1.id, "4runner-2025-trd");
        assert_eq!(result.vehicle2.id, "tacoma-2025-trd");
    }

    #[test]
    fn test_nothing_supplied_fails() {
        let catalog = catalog();
        assert!(compare(catalog.vehicles(), &CompareRequest::default()).is_err());
    }
}
