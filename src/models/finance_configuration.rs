//! Configuraciones de financiación guardadas por el usuario ("My Garage")

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payment::PaymentScenario;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceConfiguration {
    pub id: Uuid,
    pub vehicle_id: Option<String>,
    pub vehicle_model: String,
    pub configuration_name: String,
    pub scenario: PaymentScenario,
    pub monthly_payment: i64,
    pub total_cost: i64,
    pub created_at: DateTime<Utc>,
}

/// Ordena de más reciente a más antigua
pub fn sort_newest_first(configs: &mut [FinanceConfiguration]) {
    configs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
