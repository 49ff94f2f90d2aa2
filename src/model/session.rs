use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single persisted chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sequence number within the session, starting at 1.
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// A visitor's conversation with the support bot.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// keyed by `session_id`. Turns are appended through
/// [`SessionAction::Append`](crate::session_actor::SessionAction::Append).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates an empty, active session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            created_at: Utc::now(),
            is_active: true,
            messages: Vec::new(),
        }
    }

    /// Appends a turn and returns a copy of what was stored.
    pub fn push(&mut self, sender: Sender, content: String) -> ChatMessage {
        let message = ChatMessage {
            id: self.messages.len() as u64 + 1,
            sender,
            content,
            timestamp: Utc::now(),
        };
        self.messages.push(message.clone());
        message
    }
}

/// Payload for opening a new session.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub session_id: String,
}

/// Payload for updating session flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub is_active: Option<bool>,
}
