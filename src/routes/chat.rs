use axum::{
    Json,
    body::Bytes,
    extract::State,
};
use crate::{
    error::AppError,
    message::ChatResponse,
    services::translator::{parse_request, translate},
    state::SharedState,
};

// Body is taken raw so a malformed payload maps to `invalid_body` whatever
// the Content-Type header says.
pub async fn chat_completions_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let request = parse_request(&body)?;
    let response = translate(&state.backend, request).await?;
    Ok(Json(response))
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
