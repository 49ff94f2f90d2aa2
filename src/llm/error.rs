use std::time::Duration;
use thiserror::Error;

/// Why a completion could not be produced.
///
/// Every variant is recoverable: the caller falls back to the rule-based
/// composer.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Language model is not configured")]
    NotConfigured,

    #[error("Language model did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Language model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Language model returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ModelError {
    fn from(e: reqwest::Error) -> Self {
        ModelError::Transport(e.to_string())
    }
}
