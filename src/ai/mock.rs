use super::{ChatService, Part};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

enum MockReply {
    Text(String),
    Failure(String),
}

/// In-memory [`ChatService`] that replays canned replies in a cycle.
#[derive(Clone)]
pub struct MockChatClient {
    replies: Arc<Mutex<Vec<MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_parts: Arc<Mutex<Option<Vec<Part>>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_parts: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.replies.lock().unwrap().push(MockReply::Text(response));
        self
    }

    /// Queues a backend failure carrying `message`.
    pub fn with_error(self, message: String) -> Self {
        self.replies.lock().unwrap().push(MockReply::Failure(message));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Parts received by the most recent call.
    pub fn last_parts(&self) -> Option<Vec<Part>> {
        self.last_parts.lock().unwrap().clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn generate(&self, parts: &[Part]) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        *self.last_parts.lock().unwrap() = Some(parts.to_vec());

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            // Echo the last text part so callers can see what was asked.
            let last = parts.iter().rev().find_map(Part::as_text).unwrap_or("");
            return Ok(format!("Mock answer to: {}", last.trim()));
        }

        match &replies[(*count - 1) % replies.len()] {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Failure(message) => Err(Error::AiProvider(message.clone())),
        }
    }
}
