//! Error types for the Session actor.

use thiserror::Error;

/// Errors that can occur during chat session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The session id is empty or blank.
    #[error("Invalid session id: {0:?}")]
    InvalidSessionId(String),

    /// A turn with no content was submitted.
    #[error("Message content is empty")]
    EmptyMessage,

    /// Turns cannot be added to a closed session.
    #[error("Session is closed: {0}")]
    Closed(String),

    /// A session with this id already exists.
    #[error("Session already exists: {0}")]
    AlreadyExists(String),

    /// The requested session was not found.
    #[error("Session not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
