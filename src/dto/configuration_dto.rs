use serde::Deserialize;
use validator::Validate;

use crate::models::PaymentScenario;
use crate::utils::validation::validate_not_blank;

// Request para guardar una configuración de financiación
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigurationRequest {
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub vehicle_model: String,
    /// Sin nombre se usa "<modelo> - <fecha>"
    #[serde(default)]
    pub configuration_name: Option<String>,
    #[validate]
    pub scenario: PaymentScenario,
}
