//! Environment-driven configuration.

use crate::assistant::ModelSettings;
use crate::llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::llm::{LanguageModel, OpenAiClient};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` when no key is set; replies then always use the fallback composer.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub model_timeout: Duration,
    pub max_message_chars: usize,
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_output_tokens: 500,
            temperature: 0.7,
            model_timeout: Duration::from_secs(10),
            max_message_chars: 1000,
            channel_buffer: 32,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        Ok(Self {
            api_key: get("OPENAI_API_KEY"),
            model: get("OPENAI_MODEL").unwrap_or(defaults.model),
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            max_output_tokens: parse(&get, "SUPPORT_MAX_OUTPUT_TOKENS", defaults.max_output_tokens)?,
            temperature: parse(&get, "SUPPORT_TEMPERATURE", defaults.temperature)?,
            model_timeout: Duration::from_secs(parse(
                &get,
                "SUPPORT_MODEL_TIMEOUT_SECS",
                defaults.model_timeout.as_secs(),
            )?),
            max_message_chars: parse(&get, "SUPPORT_MAX_MESSAGE_CHARS", defaults.max_message_chars)?,
            channel_buffer: parse_positive(&get, "SUPPORT_CHANNEL_BUFFER", defaults.channel_buffer)?,
        })
    }

    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
            timeout: self.model_timeout,
        }
    }

    /// The configured model client, if an API key is present.
    pub fn model_client(&self) -> Option<Arc<dyn LanguageModel>> {
        let key = self.api_key.as_ref()?;
        let client = OpenAiClient::with_model(key.clone(), self.model.clone())
            .with_base_url(self.base_url.clone());
        Some(Arc::new(client))
    }
}

fn parse<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

/// Like [`parse`], but zero is rejected. Actor mailboxes need room for at
/// least one request.
fn parse_positive<G>(get: &G, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match parse(get, key, default)? {
        0 => Err(ConfigError::InvalidValue {
            key,
            value: "0".to_string(),
        }),
        n => Ok(n),
    }
}
