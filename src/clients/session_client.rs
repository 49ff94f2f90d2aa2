//! # Session Client
//!
//! High-level API over the chat session actor.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ChatMessage, ChatSession, Sender, SessionCreate, SessionUpdate};
use crate::session_actor::{SessionAction, SessionActionResult, SessionError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<ChatSession>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<ChatSession>) -> Self {
        Self { inner }
    }

    /// Opens a new session.
    #[instrument(skip(self))]
    pub async fn open(&self, session_id: &str) -> Result<String, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionCreate {
                session_id: session_id.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Returns the existing session or opens it.
    ///
    /// The boolean is `true` when the session was created by this call.
    #[instrument(skip(self))]
    pub async fn get_or_open(&self, session_id: &str) -> Result<(ChatSession, bool), SessionError> {
        if let Some(session) = self.get(session_id.to_string()).await? {
            return Ok((session, false));
        }
        let created = match self.open(session_id).await {
            Ok(_) => true,
            // Another request opened it between our get and create.
            Err(SessionError::AlreadyExists(_)) => false,
            Err(e) => return Err(e),
        };
        let session = self
            .get(session_id.to_string())
            .await?
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;
        Ok((session, created))
    }

    /// Appends a turn to the session and returns the stored message.
    #[instrument(skip(self, content))]
    pub async fn append(
        &self,
        session_id: &str,
        sender: Sender,
        content: impl Into<String> + Send,
    ) -> Result<ChatMessage, SessionError> {
        let action = SessionAction::Append {
            sender,
            content: content.into(),
        };
        match self.inner.perform_action(session_id.to_string(), action).await {
            Ok(SessionActionResult::Append(message)) => Ok(message),
            Ok(other) => Err(SessionError::ActorCommunicationError(format!(
                "unexpected result for append: {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// All turns of the session, oldest first.
    #[instrument(skip(self))]
    pub async fn history(&self, session_id: &str) -> Result<Vec<ChatMessage>, SessionError> {
        match self
            .inner
            .perform_action(session_id.to_string(), SessionAction::History)
            .await
        {
            Ok(SessionActionResult::History(messages)) => Ok(messages),
            Ok(other) => Err(SessionError::ActorCommunicationError(format!(
                "unexpected result for history: {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Marks the session inactive; later turns are rejected.
    #[instrument(skip(self))]
    pub async fn close(&self, session_id: &str) -> Result<ChatSession, SessionError> {
        self.inner
            .update(
                session_id.to_string(),
                SessionUpdate {
                    is_active: Some(false),
                },
            )
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<ChatSession> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<ChatSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::AlreadyExists(id) => SessionError::AlreadyExists(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<SessionError>() {
                Ok(err) => *err,
                Err(other) => SessionError::ActorCommunicationError(other.to_string()),
            },
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}
