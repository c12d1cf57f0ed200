use rand::Rng;
use std::sync::Arc;
use validator::Validate;

use crate::dto::dealer_dto::{DealerOffer, OfferRequest};
use crate::models::Dealer;
use crate::repositories::CatalogRepository;
use crate::services::offer_service;
use crate::utils::errors::{not_found_error, AppError};

pub struct DealerController {
    catalog: Arc<CatalogRepository>,
}

impl DealerController {
    pub fn new(catalog: Arc<CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub fn list_near(&self, zip: Option<&str>) -> Vec<Dealer> {
        self.catalog.dealers_near(zip).into_iter().cloned().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Dealer, AppError> {
        self.catalog
            .find_dealer(id)
            .cloned()
            .ok_or_else(|| not_found_error("Dealer"))
    }

    /// Ofertas de los concesionarios cercanos para un vehículo del catálogo
    pub fn request_offers<R: Rng>(
        &self,
        request: &OfferRequest,
        rng: &mut R,
    ) -> Result<Vec<DealerOffer>, AppError> {
        request.validate()?;
        let vehicle = self
            .catalog
            .find_vehicle(&request.vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle"))?;

        let dealers = self.catalog.dealers_near(request.zip.as_deref());
        let offers = offer_service::generate_offers(vehicle, &dealers, rng);

        log::info!("🏷️ {} ofertas generadas para {}", offers.len(), vehicle.id);
        Ok(offers)
    }
}
