use crate::application::ports::{LlmClient, LlmClientError};

/// Offline stand-in that always answers with a fixed reply, or fails when
/// built with [`MockLlmClient::unavailable`].
pub struct MockLlmClient {
    reply: Option<String>,
}

impl MockLlmClient {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    pub fn unavailable() -> Self {
        Self { reply: None }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str, _instructions: &str) -> Result<String, LlmClientError> {
        self.reply
            .clone()
            .ok_or_else(|| LlmClientError::NotConfigured("no LLM provider configured".to_string()))
    }
}
