use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Query de búsqueda de concesionarios (?zip=75201)
#[derive(Debug, Default, Deserialize)]
pub struct DealerQuery {
    #[serde(default)]
    pub zip: Option<String>,
}

// Request de ofertas para un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequest {
    #[validate(custom = "validate_not_blank")]
    pub vehicle_id: String,
    #[serde(default)]
    pub zip: Option<String>,
}

// Oferta simulada de un concesionario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealerOffer {
    pub dealer_id: String,
    pub dealer_name: String,
    pub dealer_location: String,
    pub dealer_phone: String,
    pub original_price: i64,
    pub discount: i64,
    pub fees: i64,
    pub final_price: i64,
    pub savings: i64,
}
