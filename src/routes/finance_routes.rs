use axum::{routing::post, Json, Router};

use crate::controllers::finance_controller::FinanceController;
use crate::dto::finance_dto::{
    BudgetCheckRequest, BudgetFitRequest, BudgetHealth, BudgetPlan, ScenarioComparison,
    ScenarioRequest,
};
use crate::models::{PaymentResult, PaymentScenario};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_finance_router() -> Router<AppState> {
    Router::new()
        .route("/scenarios", post(compare_scenarios))
        .route("/budget-fit", post(budget_fit))
        .route("/budget-check", post(budget_check))
}

pub async fn calculate_payment(
    Json(scenario): Json<PaymentScenario>,
) -> Result<Json<PaymentResult>, AppError> {
    let result = FinanceController::calculate_payment(scenario)?;
    Ok(Json(result))
}

async fn compare_scenarios(
    Json(request): Json<ScenarioRequest>,
) -> Result<Json<ScenarioComparison>, AppError> {
    Ok(Json(FinanceController::compare_scenarios(request)?))
}

async fn budget_fit(Json(request): Json<BudgetFitRequest>) -> Result<Json<Vec<BudgetPlan>>, AppError> {
    Ok(Json(FinanceController::budget_fit(request)?))
}

async fn budget_check(
    Json(request): Json<BudgetCheckRequest>,
) -> Result<Json<BudgetHealth>, AppError> {
    Ok(Json(FinanceController::budget_check(request)?))
}
