//! Calculadora de pagos: compra (amortización), leasing y suscripción
//!
//! Funciones puras. Todo el cálculo interno usa f64 sin redondear;
//! sólo los importes de salida se redondean a dólares enteros.

use crate::dto::finance_dto::{BudgetHealth, BudgetPlan, ScenarioComparison, ScenarioRequest};
use crate::models::{
    LeaseBreakdown, LeaseResult, PaymentKind, PaymentResult, PaymentScenario, PurchaseBreakdown,
    PurchaseResult, SubscriptionBreakdown, SubscriptionResult, DEFAULT_TAX_RATE,
};

/// Seguro mensual fijo incluido en la suscripción
pub const SUBSCRIPTION_INSURANCE: i64 = 150;
/// Mantenimiento mensual fijo incluido en la suscripción
pub const SUBSCRIPTION_MAINTENANCE: i64 = 100;
/// Valor residual por defecto del leasing (fracción del precio)
pub const DEFAULT_RESIDUAL_RATIO: f64 = 0.55;
/// money factor = APR / 2400
pub const MONEY_FACTOR_DIVISOR: f64 = 2400.0;

/// Umbral de pago / ingreso a partir del cual el presupuesto es arriesgado (%)
pub const RISKY_PAYMENT_RATIO: f64 = 15.0;

// Escenarios fijos de la comparación compra / leasing / suscripción
const SCENARIO_LEASE_APR: f64 = 3.9;
const SCENARIO_LEASE_TERM: u32 = 36;
const SCENARIO_SUBSCRIPTION_DOWN: f64 = 500.0;
const SCENARIO_SUBSCRIPTION_TERM: u32 = 36;

struct PlanPreset {
    name: &'static str,
    description: &'static str,
    down_ratio: f64,
    apr: f64,
    term_months: u32,
}

const BUDGET_PLANS: &[PlanPreset] = &[
    PlanPreset {
        name: "Cheapest Monthly",
        description: "Lowest monthly payment, longer term",
        down_ratio: 0.10,
        apr: 5.9,
        term_months: 84,
    },
    PlanPreset {
        name: "Lowest Total Cost",
        description: "Save on interest, pay less overall",
        down_ratio: 0.25,
        apr: 3.9,
        term_months: 48,
    },
    PlanPreset {
        name: "Minimal Upfront",
        description: "Low down payment, balanced approach",
        down_ratio: 0.05,
        apr: 6.9,
        term_months: 60,
    },
];

/// Redondeo al entero más cercano, mitades hacia +infinito
pub fn round_amount(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Calcular el pago de un escenario. Suscripción tiene prioridad sobre leasing.
pub fn calculate(scenario: &PaymentScenario) -> PaymentResult {
    let tax_rate = scenario.tax();
    let trade_in = scenario.trade_in();
    let adjusted_price = scenario.price * (1.0 + tax_rate);
    // puede ser negativo: no se recorta
    let net_price = adjusted_price - trade_in - scenario.down_payment;
    let term = f64::from(scenario.term_months);
    let taxes = round_amount(scenario.price * tax_rate);

    match scenario.kind() {
        PaymentKind::Subscription => {
            let base_monthly = net_price / term;
            let monthly_payment =
                base_monthly + (SUBSCRIPTION_INSURANCE + SUBSCRIPTION_MAINTENANCE) as f64;
            let total_cost = monthly_payment * term + scenario.down_payment + trade_in;

            PaymentResult::Subscription(SubscriptionResult {
                monthly_payment: round_amount(monthly_payment),
                total_cost: round_amount(total_cost),
                breakdown: SubscriptionBreakdown {
                    vehicle: round_amount(base_monthly),
                    insurance: SUBSCRIPTION_INSURANCE,
                    maintenance: SUBSCRIPTION_MAINTENANCE,
                    taxes,
                },
            })
        }
        PaymentKind::Lease => {
            let residual = scenario
                .residual_value
                .unwrap_or_else(|| round_amount(scenario.price * DEFAULT_RESIDUAL_RATIO) as f64);
            let depreciation = net_price - residual;
            let monthly_depreciation = depreciation / term;
            let money_factor = scenario.apr / MONEY_FACTOR_DIVISOR;
            let monthly_finance = (net_price + residual) * money_factor;
            let monthly_payment = monthly_depreciation + monthly_finance;
            let total_cost = monthly_payment * term + scenario.down_payment + trade_in;

            PaymentResult::Lease(LeaseResult {
                monthly_payment: round_amount(monthly_payment),
                total_cost: round_amount(total_cost),
                residual_value: round_amount(residual),
                breakdown: LeaseBreakdown {
                    depreciation: round_amount(monthly_depreciation),
                    finance: round_amount(monthly_finance),
                    taxes,
                },
            })
        }
        PaymentKind::Purchase => {
            let monthly_payment = amortized_payment(net_price, scenario.apr, scenario.term_months);
            let total_cost = monthly_payment * term + scenario.down_payment + trade_in;
            let total_interest = total_cost - adjusted_price;

            PaymentResult::Purchase(PurchaseResult {
                monthly_payment: round_amount(monthly_payment),
                total_cost: round_amount(total_cost),
                total_interest: round_amount(total_interest),
                breakdown: PurchaseBreakdown {
                    principal: round_amount(net_price),
                    interest: round_amount(total_interest),
                    taxes,
                    trade_in: round_amount(trade_in),
                },
            })
        }
    }
}

/// Cuota de un préstamo amortizado; sin interés es principal / plazo
pub fn amortized_payment(principal: f64, apr: f64, term_months: u32) -> f64 {
    let monthly_rate = apr / 100.0 / 12.0;
    let term = f64::from(term_months);
    if monthly_rate == 0.0 {
        principal / term
    } else {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-term))
    }
}

/// Compra, leasing y suscripción con los parámetros fijos de la página de finanzas
pub fn compare_scenarios(request: &ScenarioRequest) -> ScenarioComparison {
    let purchase = PaymentScenario {
        price: request.price,
        down_payment: request.down_payment,
        apr: request.apr,
        term_months: request.term_months,
        is_lease: false,
        is_subscription: false,
        residual_value: None,
        trade_in_value: request.trade_in_value,
        tax_rate: Some(DEFAULT_TAX_RATE),
    };

    let lease = PaymentScenario {
        apr: SCENARIO_LEASE_APR,
        term_months: SCENARIO_LEASE_TERM,
        is_lease: true,
        residual_value: Some(round_amount(request.price * DEFAULT_RESIDUAL_RATIO) as f64),
        ..purchase.clone()
    };

    let subscription = PaymentScenario {
        down_payment: SCENARIO_SUBSCRIPTION_DOWN,
        apr: 0.0,
        term_months: SCENARIO_SUBSCRIPTION_TERM,
        is_subscription: true,
        ..purchase.clone()
    };

    ScenarioComparison {
        purchase: calculate(&purchase),
        lease: calculate(&lease),
        subscription: calculate(&subscription),
    }
}

/// Planes preconfigurados; pago de compra sin impuestos ni trade-in
pub fn budget_fit_plans(price: f64) -> Vec<BudgetPlan> {
    BUDGET_PLANS
        .iter()
        .map(|preset| {
            let down_payment = price * preset.down_ratio;
            let scenario = PaymentScenario {
                tax_rate: Some(0.0),
                ..PaymentScenario::purchase(price, down_payment, preset.apr, preset.term_months)
            };
            let result = calculate(&scenario);

            BudgetPlan {
                name: preset.name.to_string(),
                description: preset.description.to_string(),
                down_payment: round_amount(down_payment),
                apr: preset.apr,
                term_months: preset.term_months,
                monthly_payment: result.monthly_payment(),
                total_cost: result.total_cost(),
            }
        })
        .collect()
}

/// Relación pago / ingreso mensual; arriesgado por encima del 15%
pub fn budget_health(monthly_payment: f64, monthly_income: f64) -> BudgetHealth {
    let ratio = if monthly_income > 0.0 {
        monthly_payment / monthly_income * 100.0
    } else {
        0.0
    };

    BudgetHealth {
        payment_to_income_ratio: ratio,
        is_risky: ratio > RISKY_PAYMENT_RATIO,
        recommended_max_payment: round_amount(monthly_income.max(0.0) * RISKY_PAYMENT_RATIO / 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase(price: f64, down: f64, apr: f64, term: u32) -> PurchaseResult {
        match calculate(&PaymentScenario::purchase(price, down, apr, term)) {
            PaymentResult::Purchase(result) => result,
            other => panic!("expected purchase, got {:?}", other),
        }
    }

    #[test]
    fn test_purchase_reference_case() {
        let result = purchase(30000.0, 5000.0, 5.0, 60);

        // 30000 * 1.08 - 5000 = 27400 financiados al 5% en 60 meses
        assert_eq!(result.monthly_payment, 517);
        assert!(result.total_interest > 0);
        assert!((result.total_cost - (result.monthly_payment * 60 + 5000)).abs() <= 60);
        assert_eq!(result.total_cost, 36024);
        assert_eq!(result.breakdown.principal, 27400);
        assert_eq!(result.breakdown.taxes, 2400);
        assert_eq!(result.breakdown.trade_in, 0);
        assert_eq!(result.breakdown.interest, result.total_interest);
    }

    #[test]
    fn test_purchase_zero_apr() {
        let result = purchase(30000.0, 5000.0, 0.0, 60);
        assert_eq!(result.monthly_payment, 457);
        assert_eq!(result.total_interest, 0);
    }

    #[test]
    fn test_purchase_with_trade_in() {
        let scenario = PaymentScenario {
            trade_in_value: Some(4000.0),
            ..PaymentScenario::purchase(30000.0, 1000.0, 5.0, 60)
        };
        let PaymentResult::Purchase(result) = calculate(&scenario) else {
            panic!("expected purchase");
        };
        // mismo principal que el caso de referencia
        assert_eq!(result.monthly_payment, 517);
        assert_eq!(result.breakdown.trade_in, 4000);
    }

    #[test]
    fn test_purchase_monotonic_in_down_payment() {
        let mut previous = i64::MAX;
        for down in [0.0, 2000.0, 4000.0, 6000.0, 8000.0] {
            let monthly = purchase(30000.0, down, 5.0, 60).monthly_payment;
            assert!(monthly < previous, "down {} gave {}", down, monthly);
            previous = monthly;
        }
    }

    #[test]
    fn test_purchase_monotonic_in_apr() {
        let mut previous = i64::MIN;
        for apr in [1.0, 3.0, 5.0, 7.0, 9.0] {
            let monthly = purchase(30000.0, 5000.0, apr, 60).monthly_payment;
            assert!(monthly > previous, "apr {} gave {}", apr, monthly);
            previous = monthly;
        }
    }

    #[test]
    fn test_subscription_reference_case() {
        let scenario = PaymentScenario {
            is_subscription: true,
            ..PaymentScenario::purchase(30000.0, 500.0, 0.0, 36)
        };
        let PaymentResult::Subscription(result) = calculate(&scenario) else {
            panic!("expected subscription");
        };
        let net_price = 30000.0 * 1.08 - 0.0 - 500.0;
        assert_eq!(result.monthly_payment, round_amount(net_price / 36.0 + 150.0 + 100.0));
        assert_eq!(result.monthly_payment, 1136);
        assert_eq!(result.breakdown.vehicle, 886);
        assert_eq!(result.breakdown.insurance, 150);
        assert_eq!(result.breakdown.maintenance, 100);
        assert_eq!(result.breakdown.taxes, 2400);
        assert_eq!(result.total_cost, 41400);
    }

    #[test]
    fn test_subscription_takes_precedence_over_lease() {
        let scenario = PaymentScenario {
            is_lease: true,
            is_subscription: true,
            ..PaymentScenario::purchase(30000.0, 500.0, 3.9, 36)
        };
        assert_eq!(calculate(&scenario).kind(), PaymentKind::Subscription);
    }

    #[test]
    fn test_lease_default_residual() {
        let scenario = PaymentScenario {
            is_lease: true,
            ..PaymentScenario::purchase(36000.0, 3000.0, 3.9, 36)
        };
        let PaymentResult::Lease(result) = calculate(&scenario) else {
            panic!("expected lease");
        };
        // residual = 36000 * 0.55
        assert_eq!(result.residual_value, 19800);
        assert_eq!(result.breakdown.depreciation, 447);
        assert_eq!(result.breakdown.finance, 90);
        assert_eq!(result.monthly_payment, 537);
        assert_eq!(result.total_cost, 22337);
    }

    #[test]
    fn test_lease_explicit_residual_echoed() {
        let scenario = PaymentScenario {
            is_lease: true,
            residual_value: Some(20000.0),
            ..PaymentScenario::purchase(36000.0, 3000.0, 0.0, 36)
        };
        let PaymentResult::Lease(result) = calculate(&scenario) else {
            panic!("expected lease");
        };
        assert_eq!(result.residual_value, 20000);
        assert_eq!(result.breakdown.finance, 0);
    }

    #[test]
    fn test_negative_net_price_is_not_clamped() {
        let result = purchase(10000.0, 20000.0, 5.0, 12);
        assert!(result.monthly_payment < 0);
        assert!(result.breakdown.principal < 0);
    }

    #[test]
    fn test_round_amount_half_up() {
        assert_eq!(round_amount(2.5), 3);
        assert_eq!(round_amount(2.49), 2);
        assert_eq!(round_amount(-2.5), -2);
        assert_eq!(round_amount(-2.51), -3);
    }

    #[test]
    fn test_compare_scenarios_uses_fixed_presets() {
        let request = ScenarioRequest {
            price: 30000.0,
            down_payment: 5000.0,
            apr: 5.0,
            term_months: 60,
            trade_in_value: None,
        };
        let comparison = compare_scenarios(&request);
        assert_eq!(comparison.purchase.monthly_payment(), 517);
        assert_eq!(comparison.subscription.monthly_payment(), 1136);

        let PaymentResult::Lease(lease) = comparison.lease else {
            panic!("expected lease");
        };
        assert_eq!(lease.residual_value, 16500);
    }

    #[test]
    fn test_budget_fit_plans() {
        let plans = budget_fit_plans(30000.0);
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].name, "Cheapest Monthly");
        assert_eq!(plans[0].down_payment, 3000);
        assert_eq!(plans[0].monthly_payment, 393);
        assert_eq!(plans[1].monthly_payment, 507);
        assert_eq!(plans[2].monthly_payment, 563);
        // el plan de menor coste total es el de 48 meses
        let cheapest_total = plans.iter().min_by_key(|p| p.total_cost).unwrap();
        assert_eq!(cheapest_total.name, "Lowest Total Cost");
    }

    #[test]
    fn test_budget_health() {
        let healthy = budget_health(500.0, 5000.0);
        assert!((healthy.payment_to_income_ratio - 10.0).abs() < 1e-9);
        assert!(!healthy.is_risky);
        assert_eq!(healthy.recommended_max_payment, 750);

        let risky = budget_health(1000.0, 5000.0);
        assert!(risky.is_risky);

        let no_income = budget_health(1000.0, 0.0);
        assert_eq!(no_income.payment_to_income_ratio, 0.0);
        assert!(!no_income.is_risky);
    }
}
