use super::client::GeminiHttpClient;
use super::types::{GenerateContentResponse, Part};
use crate::ai::ChatService;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;

/// The single model every question is sent to.
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Finish reasons that invalidate the candidate, even when it carries text.
const BLOCKED_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    contents: Vec<UserContent<'a>>,
}

#[derive(Debug, Serialize)]
struct UserContent<'a> {
    role: &'static str,
    parts: &'a [Part],
}

/// Gemini implementation of [`ChatService`]: one user turn, one completion.
pub struct GeminiChatClient {
    http: GeminiHttpClient,
}

impl GeminiChatClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, GEMINI_MODEL.to_string(), client),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Result<String> {
        let Some(candidate) = response.candidates.first() else {
            let reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref());
            return Err(match reason {
                Some(reason) => Error::AiProvider(format!(
                    "Text not available. Response was blocked due to {}",
                    reason
                )),
                None => Error::AiProvider("No candidates in Gemini response".to_string()),
            });
        };

        if let Some(reason) = candidate
            .finish_reason
            .as_deref()
            .filter(|r| BLOCKED_FINISH_REASONS.contains(r))
        {
            return Err(Error::AiProvider(format!(
                "Text not available. Candidate was blocked due to {}",
                reason
            )));
        }

        Ok(candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(Part::as_text)
            .collect())
    }
}

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn generate(&self, parts: &[Part]) -> Result<String> {
        tracing::debug!(
            model = self.http.model(),
            parts = parts.len(),
            "Sending generateContent request"
        );

        let request = ChatRequest {
            contents: vec![UserContent {
                role: "user",
                parts,
            }],
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;
        Self::extract_text(&response)
    }
}
