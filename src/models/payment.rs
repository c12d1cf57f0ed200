//! Modelos de cálculo de pagos (compra, leasing, suscripción)
//!
//! `PaymentScenario` es la entrada de `/api/calculate-payment`; `PaymentResult`
//! la salida, etiquetada con `type` = purchase | lease | subscription.
//! Todos los importes de salida van redondeados a dólares enteros.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Impuesto por defecto (8%) cuando el cliente no envía `taxRate`
pub const DEFAULT_TAX_RATE: f64 = 0.08;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentScenario {
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub down_payment: f64,
    /// Tasa anual en porcentaje (4.9 = 4.9%)
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub apr: f64,
    #[validate(range(min = 1))]
    pub term_months: u32,
    #[serde(default)]
    pub is_lease: bool,
    #[serde(default)]
    pub is_subscription: bool,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub residual_value: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub trade_in_value: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub tax_rate: Option<f64>,
}

impl PaymentScenario {
    /// Escenario de compra con los valores por defecto de impuesto y sin trade-in
    pub fn purchase(price: f64, down_payment: f64, apr: f64, term_months: u32) -> Self {
        Self {
            price,
            down_payment,
            apr,
            term_months,
            is_lease: false,
            is_subscription: false,
            residual_value: None,
            trade_in_value: None,
            tax_rate: None,
        }
    }

    pub fn trade_in(&self) -> f64 {
        self.trade_in_value.unwrap_or(0.0)
    }

    pub fn tax(&self) -> f64 {
        self.tax_rate.unwrap_or(DEFAULT_TAX_RATE)
    }

    /// Qué rama de cálculo aplica. Suscripción tiene prioridad sobre leasing.
    pub fn kind(&self) -> PaymentKind {
        if self.is_subscription {
            PaymentKind::Subscription
        } else if self.is_lease {
            PaymentKind::Lease
        } else {
            PaymentKind::Purchase
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Purchase,
    Lease,
    Subscription,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseBreakdown {
    pub principal: i64,
    pub interest: i64,
    pub taxes: i64,
    pub trade_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    pub monthly_payment: i64,
    pub total_cost: i64,
    pub total_interest: i64,
    pub breakdown: PurchaseBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaseBreakdown {
    pub depreciation: i64,
    pub finance: i64,
    pub taxes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaseResult {
    pub monthly_payment: i64,
    pub total_cost: i64,
    pub residual_value: i64,
    pub breakdown: LeaseBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionBreakdown {
    pub vehicle: i64,
    pub insurance: i64,
    pub maintenance: i64,
    pub taxes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResult {
    pub monthly_payment: i64,
    pub total_cost: i64,
    pub breakdown: SubscriptionBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentResult {
    Purchase(PurchaseResult),
    Lease(LeaseResult),
    Subscription(SubscriptionResult),
}

impl PaymentResult {
    pub fn monthly_payment(&self) -> i64 {
        match self {
            PaymentResult::Purchase(r) => r.monthly_payment,
            PaymentResult::Lease(r) => r.monthly_payment,
            PaymentResult::Subscription(r) => r.monthly_payment,
        }
    }

    pub fn total_cost(&self) -> i64 {
        match self {
            PaymentResult::Purchase(r) => r.total_cost,
            PaymentResult::Lease(r) => r.total_cost,
            PaymentResult::Subscription(r) => r.total_cost,
        }
    }

    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentResult::Purchase(_) => PaymentKind::Purchase,
            PaymentResult::Lease(_) => PaymentKind::Lease,
            PaymentResult::Subscription(_) => PaymentKind::Subscription,
        }
    }
}
