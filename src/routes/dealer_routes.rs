use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::dealer_controller::DealerController;
use crate::dto::dealer_dto::{DealerOffer, DealerQuery, OfferRequest};
use crate::models::Dealer;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dealer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_dealers))
        .route("/:id", get(get_dealer))
}

async fn list_dealers(
    State(state): State<AppState>,
    Query(query): Query<DealerQuery>,
) -> Json<Vec<Dealer>> {
    let controller = DealerController::new(state.catalog.clone());
    Json(controller.list_near(query.zip.as_deref()))
}

async fn get_dealer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Dealer>, AppError> {
    let controller = DealerController::new(state.catalog.clone());
    let dealer = controller.get_by_id(&id)?;
    Ok(Json(dealer))
}

pub async fn request_offers(
    State(state): State<AppState>,
    Json(request): Json<OfferRequest>,
) -> Result<Json<Vec<DealerOffer>>, AppError> {
    let controller = DealerController::new(state.catalog.clone());
    let offers = controller.request_offers(&request, &mut rand::thread_rng())?;
    Ok(Json(offers))
}
