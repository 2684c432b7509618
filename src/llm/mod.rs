pub mod error;
pub mod openai;
pub mod prompt_builder;
mod prompts;

pub use error::LlmError;

use serde::Serialize;

/// One role-tagged segment of the summarization request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for talking to an LLM (real backend or dummy).
pub trait LlmClient: Send + Sync {
    /// Send the assembled request and return the model's raw reply text.
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

/// No-op / dummy model client for development with --no-model or model=none.
pub struct NoopClient;

impl LlmClient for NoopClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        Ok(format!(
            "Dummy PR title for testing\n\nGenerated from {} prompt segment(s); LLM disabled.",
            messages.len()
        ))
    }
}
