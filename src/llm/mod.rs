//! Chat-completion language models.
//!
//! The assistant only talks to models through the [`LanguageModel`] trait, so
//! the network client can be swapped for a fake in tests.

pub mod error;
pub mod openai;

pub use error::ModelError;
pub use openai::OpenAiClient;

use async_trait::async_trait;
use std::time::Duration;

/// One system + user exchange sent to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Returns the model's reply text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ModelError>;

    /// Name used in logs.
    fn model_name(&self) -> &str;
}
