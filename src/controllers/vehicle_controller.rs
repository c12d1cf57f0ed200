use std::sync::Arc;

use crate::dto::vehicle_dto::{CompareRequest, ComparisonResponse, SearchRequest, SearchResponse};
use crate::models::{FilterRecord, Vehicle};
use crate::repositories::CatalogRepository;
use crate::services::{comparison_service, query_parser, vehicle_filter};
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    catalog: Arc<CatalogRepository>,
}

impl VehicleController {
    pub fn new(catalog: Arc<CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub fn list(&self) -> Vec<Vehicle> {
        self.catalog.vehicles().to_vec()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Vehicle, AppError> {
        self.catalog
            .find_vehicle(id)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle"))
    }

    /// Búsqueda en lenguaje natural. Sin consulta devuelve el catálogo completo.
    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        let query = request.query.unwrap_or_default();

        let (vehicles, filters) = if query.trim().is_empty() {
            (self.catalog.vehicles().to_vec(), FilterRecord::default())
        } else {
            let filters = query_parser::parse(&query);
            let vehicles = vehicle_filter::filter_owned(self.catalog.vehicles(), &filters);
            (vehicles, filters)
        };

        log::info!("🔎 Búsqueda '{}': {} vehículos", query, vehicles.len());

        SearchResponse {
            count: vehicles.len(),
            vehicles,
            filters,
        }
    }

    pub fn compare(&self, request: CompareRequest) -> Result<ComparisonResponse, AppError> {
        let comparison = comparison_service::compare(self.catalog.vehicles(), &request)?;
        log::info!(
            "⚖️ Comparación: {} vs {}",
            comparison.vehicle1.id,
            comparison.vehicle2.id
        );
        Ok(comparison)
    }
}
