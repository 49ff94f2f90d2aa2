//! # Chat Service
//!
//! The operations a web front end calls: send a message, submit a rating, read
//! a session's history. Input is validated here, before the assistant runs.
//! Turns are stored through the session actor, ratings through the delivery
//! actor.

pub mod error;
pub mod rating;

pub use error::{ServiceError, INTERNAL_FALLBACK_RESPONSE};
pub use rating::rating_reply;

use crate::assistant::{ReplySource, ResponseOrchestrator};
use crate::clients::{DeliveryClient, SessionClient};
use crate::delivery_actor::entity::RATING_RANGE;
use crate::delivery_actor::DeliveryError;
use crate::model::{ChatMessage, DeliveryRecord, Sender};
use crate::session_actor::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Characters of a message or reply quoted in logs.
const LOG_PREVIEW_CHARS: usize = 100;

pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 1000;

/// Result of [`ChatService::send_message`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    /// Id of the stored bot turn.
    pub message_id: u64,
    pub timestamp: DateTime<Utc>,
    pub tracking_number: Option<String>,
    pub delivery: Option<DeliveryRecord>,
    pub source: ReplySource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingRequest {
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Result of [`ChatService::submit_rating`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingReceipt {
    pub response: String,
    /// `true` only when the rating was written to a stored delivery record.
    pub rating_saved: bool,
}

pub struct ChatService {
    orchestrator: ResponseOrchestrator<DeliveryClient>,
    deliveries: DeliveryClient,
    sessions: SessionClient,
    max_message_chars: usize,
}

impl ChatService {
    pub fn new(
        orchestrator: ResponseOrchestrator<DeliveryClient>,
        deliveries: DeliveryClient,
        sessions: SessionClient,
    ) -> Self {
        Self {
            orchestrator,
            deliveries,
            sessions,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }

    pub fn with_max_message_chars(mut self, max: usize) -> Self {
        self.max_message_chars = max;
        self
    }

    /// Answers one customer message and stores both turns.
    ///
    /// A missing session id starts a new session with a random id.
    #[instrument(skip(self, message))]
    pub async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ServiceError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ServiceError::EmptyMessage);
        }
        if message.chars().count() > self.max_message_chars {
            return Err(ServiceError::MessageTooLong {
                max: self.max_message_chars,
            });
        }

        let session_id = match session_id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };
        let (_, created) = self.sessions.get_or_open(&session_id).await?;
        if created {
            debug!(session_id = %session_id, "Session opened");
        }
        info!(session_id = %session_id, message = %preview(message), "New message");

        self.sessions.append(&session_id, Sender::User, message).await?;
        let reply = self.orchestrator.respond(message).await;
        let stored = self
            .sessions
            .append(&session_id, Sender::Bot, reply.text.clone())
            .await?;

        info!(
            session_id = %session_id,
            source = reply.source.as_str(),
            response = %preview(&reply.text),
            "Reply generated"
        );

        Ok(ChatReply {
            response: reply.text,
            session_id,
            message_id: stored.id,
            timestamp: stored.timestamp,
            tracking_number: reply.tracking_number,
            delivery: reply.delivery,
            source: reply.source,
        })
    }

    /// Records a customer rating and thanks them for it.
    #[instrument(skip(self, request), fields(rating = request.rating))]
    pub async fn submit_rating(&self, request: RatingRequest) -> Result<RatingReceipt, ServiceError> {
        let rating = u8::try_from(request.rating)
            .ok()
            .filter(|r| RATING_RANGE.contains(r))
            .ok_or(ServiceError::InvalidRating(request.rating))?;

        let mut rating_saved = false;
        if let Some(tracking_number) = non_blank(request.tracking_number.as_deref()) {
            match self.deliveries.rate(tracking_number, rating).await {
                Ok(_) => {
                    info!(tracking_number, rating, "Rating saved");
                    rating_saved = true;
                }
                Err(DeliveryError::NotFound(_)) => {
                    warn!(tracking_number, "Tracking number not found for rating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let response = rating_reply(rating, &request.comment);

        if let Some(session_id) = non_blank(request.session_id.as_deref()) {
            match self.sessions.append(session_id, Sender::Bot, response.clone()).await {
                Ok(_) => {}
                Err(SessionError::NotFound(_)) | Err(SessionError::Closed(_)) => {
                    debug!(session_id, "Rating reply not stored in session");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(RatingReceipt {
            response,
            rating_saved,
        })
    }

    /// All turns of a session, oldest first.
    #[instrument(skip(self))]
    pub async fn chat_history(&self, session_id: &str) -> Result<Vec<ChatMessage>, ServiceError> {
        Ok(self.sessions.history(session_id).await?)
    }

    /// Marks a session inactive.
    #[instrument(skip(self))]
    pub async fn end_session(&self, session_id: &str) -> Result<(), ServiceError> {
        self.sessions.close(session_id).await?;
        Ok(())
    }

    pub fn has_model(&self) -> bool {
        self.orchestrator.has_model()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::model::{ChatSession, DeliveryRecord};
    use crate::session_actor::SessionActionResult;

    fn service(
        deliveries: &MockClient<DeliveryRecord>,
        sessions: &MockClient<ChatSession>,
    ) -> ChatService {
        let deliveries = DeliveryClient::new(deliveries.client());
        ChatService::new(
            ResponseOrchestrator::new(deliveries.clone()),
            deliveries,
            SessionClient::new(sessions.client()),
        )
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected_before_anything_runs() {
        let deliveries = MockClient::<DeliveryRecord>::new();
        let sessions = MockClient::<ChatSession>::new();
        let service = service(&deliveries, &sessions);

        assert_eq!(
            service.send_message("   \n", None).await,
            Err(ServiceError::EmptyMessage)
        );
        assert_eq!(service.send_message("", Some("s-1")).await, Err(ServiceError::EmptyMessage));
        deliveries.verify();
        sessions.verify();
    }

    #[tokio::test]
    async fn test_long_message_is_rejected() {
        let deliveries = MockClient::<DeliveryRecord>::new();
        let sessions = MockClient::<ChatSession>::new();
        let service = service(&deliveries, &sessions).with_max_message_chars(10);

        assert_eq!(
            service.send_message("ééééééééééé", None).await,
            Err(ServiceError::MessageTooLong { max: 10 })
        );
    }

    #[tokio::test]
    async fn test_invalid_ratings_are_rejected() {
        let deliveries = MockClient::<DeliveryRecord>::new();
        let sessions = MockClient::<ChatSession>::new();
        let service = service(&deliveries, &sessions);

        for rating in [0, 6, -1, 300] {
            let request = RatingRequest {
                rating,
                comment: String::new(),
                tracking_number: Some("FDE123456789".into()),
                session_id: None,
            };
            assert_eq!(
                service.submit_rating(request).await,
                Err(ServiceError::InvalidRating(rating))
            );
        }
        deliveries.verify();
    }

    #[tokio::test]
    async fn test_rating_for_unknown_delivery_is_not_saved() {
        let mut deliveries = MockClient::<DeliveryRecord>::new();
        deliveries
            .expect_action("FDE000000000".to_string())
            .return_err(FrameworkError::NotFound("FDE000000000".to_string()));
        let mut sessions = MockClient::<ChatSession>::new();
        sessions
            .expect_action("s-9".to_string())
            .return_err(FrameworkError::NotFound("s-9".to_string()));
        let service = service(&deliveries, &sessions);

        let receipt = service
            .submit_rating(RatingRequest {
                rating: 5,
                comment: "Mantap".to_string(),
                tracking_number: Some("FDE000000000".to_string()),
                session_id: Some("s-9".to_string()),
            })
            .await
            .unwrap();

        assert!(!receipt.rating_saved);
        assert!(receipt.response.contains("Komentar Anda: 'Mantap'"));
        deliveries.verify();
        sessions.verify();
    }

    #[tokio::test]
    async fn test_history_of_unknown_session() {
        let deliveries = MockClient::<DeliveryRecord>::new();
        let mut sessions = MockClient::<ChatSession>::new();
        sessions
            .expect_action("missing".to_string())
            .return_err(FrameworkError::NotFound("missing".to_string()));
        let service = service(&deliveries, &sessions);

        let err = service.chat_history("missing").await.unwrap_err();
        assert_eq!(err, ServiceError::SessionNotFound("missing".to_string()));
        assert_eq!(err.to_string(), "Session tidak ditemukan");
    }

    #[tokio::test]
    async fn test_history_returns_messages() {
        let deliveries = MockClient::<DeliveryRecord>::new();
        let mut sessions = MockClient::<ChatSession>::new();
        let mut session = ChatSession::new("s-1");
        session.push(Sender::User, "halo".to_string());
        session.push(Sender::Bot, "Halo juga".to_string());
        sessions
            .expect_action("s-1".to_string())
            .return_ok(SessionActionResult::History(session.messages.clone()));
        let service = service(&deliveries, &sessions);

        let history = service.chat_history("s-1").await.unwrap();
        assert_eq!(history, session.messages);
    }
}
