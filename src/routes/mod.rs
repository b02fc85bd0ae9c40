// src/routes/mod.rs
pub mod chat;

use std::time::Duration;

use crate::state::SharedState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::post,
};
use chat::{chat_completions_handler, method_not_allowed_handler};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub fn create_router() -> Router<SharedState> {
    // Answers every OPTIONS preflight itself with an empty 200.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route(
            CHAT_COMPLETIONS_PATH,
            post(chat_completions_handler).fallback(method_not_allowed_handler),
        )
        // prompts are unbounded; no 2 MiB cap on the raw body
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
