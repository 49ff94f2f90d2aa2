//! Custom actions for the Session actor.

use crate::model::{ChatMessage, Sender};

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Appends a turn to the conversation.
    Append { sender: Sender, content: String },
    /// Returns every turn in the order it was appended.
    History,
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone, PartialEq)]
pub enum SessionActionResult {
    Append(ChatMessage),
    History(Vec<ChatMessage>),
}
