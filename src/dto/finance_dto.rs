use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::PaymentResult;

// Request de comparación compra / leasing / suscripción
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub down_payment: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub apr: f64,
    #[validate(range(min = 1))]
    pub term_months: u32,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub trade_in_value: Option<f64>,
}

// Response con los tres escenarios calculados
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioComparison {
    pub purchase: PaymentResult,
    pub lease: PaymentResult,
    pub subscription: PaymentResult,
}

// Request de planes preconfigurados ("One-Click Budget Fit")
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BudgetFitRequest {
    #[validate(range(min = 0.0))]
    pub price: f64,
}

// Plan preconfigurado con su pago mensual
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub name: String,
    pub description: String,
    pub down_payment: i64,
    pub apr: f64,
    pub term_months: u32,
    pub monthly_payment: i64,
    pub total_cost: i64,
}

// Request del chequeo de salud del presupuesto
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCheckRequest {
    #[validate(range(min = 0.0))]
    pub monthly_payment: f64,
    #[serde(default)]
    pub monthly_income: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetHealth {
    /// Porcentaje del ingreso mensual (0 si no hay ingreso)
    pub payment_to_income_ratio: f64,
    pub is_risky: bool,
    pub recommended_max_payment: i64,
}
