//! Top-level reply generation: extraction, lookup, model attempt, fallback.

use super::composer::compose;
use super::extractor::extract_tracking_number;
use super::lookup::{DeliveryLookup, DeliveryStore, RandomSource};
use super::prompt::build_prompt;
use crate::llm::{CompletionRequest, LanguageModel, ModelError};
use crate::model::DeliveryRecord;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Characters of the customer message quoted in model logs.
const LOG_PREFIX_CHARS: usize = 50;

/// Knobs for the model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSettings {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            max_output_tokens: 500,
            temperature: 0.7,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Model,
    Fallback,
}

impl ReplySource {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplySource::Model => "model",
            ReplySource::Fallback => "fallback",
        }
    }
}

/// A generated reply together with what it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub tracking_number: Option<String>,
    pub delivery: Option<DeliveryRecord>,
    pub source: ReplySource,
}

/// Produces replies for customer messages. [`respond`](Self::respond) never
/// fails: every model problem ends in the rule-based composer.
pub struct ResponseOrchestrator<S> {
    lookup: DeliveryLookup<S>,
    model: Option<Arc<dyn LanguageModel>>,
    settings: ModelSettings,
}

impl<S: DeliveryStore> ResponseOrchestrator<S> {
    /// An orchestrator without a model; every reply comes from the composer.
    pub fn new(store: S) -> Self {
        Self {
            lookup: DeliveryLookup::new(store),
            model: None,
            settings: ModelSettings::default(),
        }
    }

    pub fn with_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_settings(mut self, settings: ModelSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_random(mut self, random: RandomSource) -> Self {
        self.lookup = self.lookup.with_random(random);
        self
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    #[instrument(skip(self, message), fields(chars = message.chars().count()))]
    pub async fn respond(&self, message: &str) -> Reply {
        let tracking_number = extract_tracking_number(message);
        let delivery = match tracking_number.as_deref() {
            Some(tn) => Some(self.lookup.resolve(tn).await.record),
            None => None,
        };
        debug!(tracking_number = ?tracking_number, "Message interpreted");

        match self.ask_model(message, delivery.as_ref()).await {
            Ok(text) => {
                info!(
                    model = ?self.model.as_ref().map(|m| m.model_name()),
                    message = %log_prefix(message),
                    "Model reply generated"
                );
                Reply {
                    text,
                    tracking_number,
                    delivery,
                    source: ReplySource::Model,
                }
            }
            Err(ModelError::NotConfigured) => {
                debug!("No language model configured, using fallback");
                self.fallback(message, tracking_number, delivery)
            }
            Err(e) => {
                warn!(error = %e, "Language model failed, using fallback");
                self.fallback(message, tracking_number, delivery)
            }
        }
    }

    async fn ask_model(
        &self,
        message: &str,
        delivery: Option<&DeliveryRecord>,
    ) -> Result<String, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::NotConfigured)?;
        let prompt = build_prompt(message, delivery);
        let request = CompletionRequest {
            system_prompt: prompt.system,
            user_prompt: prompt.user,
            max_output_tokens: self.settings.max_output_tokens,
            temperature: self.settings.temperature,
            timeout: self.settings.timeout,
        };

        let text = tokio::time::timeout(self.settings.timeout, model.complete(&request))
            .await
            .map_err(|_| ModelError::Timeout(self.settings.timeout))??;

        let text = text.trim();
        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    fn fallback(
        &self,
        message: &str,
        tracking_number: Option<String>,
        delivery: Option<DeliveryRecord>,
    ) -> Reply {
        Reply {
            text: compose(message, delivery.as_ref()),
            tracking_number,
            delivery,
            source: ReplySource::Fallback,
        }
    }
}

fn log_prefix(message: &str) -> String {
    message.chars().take(LOG_PREFIX_CHARS).collect()
}
