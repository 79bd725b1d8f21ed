//! `/chat` and `/health` handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::{Json, Router};
use axum::routing::{get, post};
use serde_json::{json, Value};

use super::error::{shape, ChatError};
use crate::app::ChatApp;
use crate::models::ChatRequest;

/// Register chat and health routes.
pub fn router() -> Router<ChatApp> {
    Router::new()
        .route("/chat", post(chat))
        // Path used by the web client.
        .route("/api/chat", post(chat))
        .route("/health", get(health))
}

/// Answer one farmer question (`POST /chat`).
///
/// The body is validated into a typed [`ChatRequest`] first; schema
/// failures become a JSON 400 instead of axum's plain-text rejection.
pub async fn chat(
    State(app): State<ChatApp>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(request)) => app.handle(request).await,
        Err(rejection) => Err(ChatError::from(rejection)),
    };
    shape(result)
}

/// Heartbeat endpoint.
pub async fn health(State(app): State<ChatApp>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model": crate::ai::GEMINI_MODEL,
        "configured": app.is_configured(),
    }))
}
