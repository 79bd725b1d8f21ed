//! Generative model integration
//!
//! [`ChatService`] is the seam between request handling and the hosted
//! model: Gemini in production, [`MockChatClient`] in tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{Content, GeminiChatClient, InlineData, Part, GEMINI_MODEL};
pub use mock::MockChatClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Sends the composed parts as a single user turn and returns the
    /// model's plain-text answer.
    async fn generate(&self, parts: &[Part]) -> Result<String>;
}
