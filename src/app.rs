//! Request orchestration: validate, compose, invoke.

use std::sync::Arc;

use crate::ai::{ChatService, GeminiChatClient};
use crate::compose::compose_request;
use crate::models::{ChatRequest, ChatResponse, Config};
use crate::server::ChatError;
use tracing::{debug, info, warn};

/// Process-wide handle to the model backend.
///
/// Holds no per-request state; clones share the same client.
#[derive(Clone)]
pub struct ChatApp {
    chat: Option<Arc<dyn ChatService>>,
}

impl ChatApp {
    /// Build an app around an injected backend. `None` means the credential
    /// is missing and every valid request is answered with a configuration
    /// error.
    pub fn with_service(chat: Option<Arc<dyn ChatService>>) -> Self {
        Self { chat }
    }

    /// Construct the Gemini-backed app from environment configuration.
    pub fn from_config(config: &Config) -> Self {
        let chat = match &config.gemini_api_key {
            Some(api_key) => {
                info!(model = crate::ai::GEMINI_MODEL, "Chat provider: Gemini");
                Some(Arc::new(GeminiChatClient::new(api_key.clone())) as Arc<dyn ChatService>)
            }
            None => {
                warn!("GEMINI_API_KEY not set; /chat will report a configuration error");
                None
            }
        };
        Self { chat }
    }

    pub fn is_configured(&self) -> bool {
        self.chat.is_some()
    }

    /// Answers one question. Input is checked before the credential, and
    /// neither check touches the backend.
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        if !request.has_input() {
            return Err(ChatError::Input);
        }

        let chat = self.chat.as_ref().ok_or(ChatError::Configuration)?;

        let parts = compose_request(&request);
        debug!(
            language = ?request.language,
            parts = parts.len(),
            has_image = request.image_data().is_some(),
            "Composed prompt"
        );

        let response = chat.generate(&parts).await?;

        Ok(ChatResponse {
            response,
            language: request.language,
        })
    }
}
