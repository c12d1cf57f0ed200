use validator::Validate;

use crate::dto::finance_dto::{
    BudgetCheckRequest, BudgetFitRequest, BudgetHealth, BudgetPlan, ScenarioComparison,
    ScenarioRequest,
};
use crate::models::{PaymentResult, PaymentScenario};
use crate::services::payment_calculator;
use crate::utils::errors::AppError;

/// Cálculos financieros: sin estado, sólo valida y delega en la calculadora
pub struct FinanceController;

impl FinanceController {
    pub fn calculate_payment(scenario: PaymentScenario) -> Result<PaymentResult, AppError> {
        scenario.validate()?;
        let result = payment_calculator::calculate(&scenario);
        log::debug!(
            "💰 Pago {:?}: {} / mes, total {}",
            result.kind(),
            result.monthly_payment(),
            result.total_cost()
        );
        Ok(result)
    }

    pub fn compare_scenarios(request: ScenarioRequest) -> Result<ScenarioComparison, AppError> {
        request.validate()?;
        Ok(payment_calculator::compare_scenarios(&request))
    }

    pub fn budget_fit(request: BudgetFitRequest) -> Result<Vec<BudgetPlan>, AppError> {
        request.validate()?;
        Ok(payment_calculator::budget_fit_plans(request.price))
    }

    pub fn budget_check(request: BudgetCheckRequest) -> Result<BudgetHealth, AppError> {
        request.validate()?;
        Ok(payment_calculator::budget_health(
            request.monthly_payment,
            request.monthly_income,
        ))
    }
}
