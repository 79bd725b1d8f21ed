//! Response shaping for `/chat`.
//!
//! Every outcome, success or failure, leaves as a JSON body with a status
//! code. Handlers return [`shape`]d results so nothing escapes as a bare
//! transport error.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::{ChatResponse, ErrorResponse};

pub const INPUT_REQUIRED: &str = "Message or image is required";
pub const API_KEY_MISSING: &str = "Gemini API key not configured";
pub const GENERATION_FAILED: &str = "Failed to generate response";
pub const INVALID_BODY: &str = "Invalid request body";
pub const BODY_TOO_LARGE: &str = "Request body too large";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Terminal failures of a chat request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Neither question text nor an image was supplied.
    #[error("message or image is required")]
    Input,

    /// The body was not JSON or did not fit the request schema.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The body exceeded the configured size limit.
    #[error("request body too large: {0}")]
    TooLarge(String),

    /// The backend credential is missing. Operator-fixable.
    #[error("Gemini API key not configured")]
    Configuration,

    /// Composition or the model call failed.
    #[error("generation failed: {0}")]
    Backend(String),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::Input | ChatError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ChatError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ChatError::Configuration | ChatError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        let (error, details) = match self {
            ChatError::Input => (INPUT_REQUIRED, None),
            ChatError::InvalidBody(d) => (INVALID_BODY, Some(d.clone())),
            ChatError::TooLarge(d) => (BODY_TOO_LARGE, Some(d.clone())),
            ChatError::Configuration => (API_KEY_MISSING, None),
            ChatError::Backend(d) => {
                let details = if d.is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    d.clone()
                };
                (GENERATION_FAILED, Some(details))
            }
        };
        ErrorResponse {
            error: error.to_string(),
            details,
        }
    }
}

impl From<crate::Error> for ChatError {
    fn from(e: crate::Error) -> Self {
        ChatError::Backend(e.to_string())
    }
}

impl From<JsonRejection> for ChatError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ChatError::TooLarge(rejection.body_text())
        } else {
            ChatError::InvalidBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match &self {
            ChatError::Input | ChatError::InvalidBody(_) | ChatError::TooLarge(_) => {
                warn!(error = %self, "rejected chat request");
            }
            ChatError::Configuration => {
                error!("GEMINI_API_KEY is not set; chat requests cannot be served");
            }
            ChatError::Backend(details) => {
                error!(details = %details, "Error generating AI response");
            }
        }
        (self.status(), Json(self.body())).into_response()
    }
}

/// Maps a request outcome to its status and JSON payload.
pub fn shape(result: Result<ChatResponse, ChatError>) -> Response {
    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}
