use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::dto::chat_dto::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// El chat nunca responde con el formato de error genérico: un cuerpo
/// ilegible se convierte en la respuesta de ayuda con `error: true`
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<ChatResponse>) {
    match payload {
        Ok(Json(request)) => (StatusCode::OK, Json(state.chat.respond(&request).await)),
        Err(rejection) => {
            tracing::error!("❌ Error procesando mensaje de chat: {}", rejection.body_text());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse::failure(rejection.body_text())),
            )
        }
    }
}
