//! [`ActorEntity`] implementation for [`ChatSession`].

use super::actions::{SessionAction, SessionActionResult};
use super::error::SessionError;
use crate::framework::ActorEntity;
use crate::model::{ChatSession, SessionCreate, SessionUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for ChatSession {
    type Id = String;
    type Create = SessionCreate;
    type Update = SessionUpdate;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = ();
    type Error = SessionError;

    fn id(&self) -> String {
        self.session_id.clone()
    }

    fn from_create_params(params: SessionCreate) -> Result<Self, SessionError> {
        if params.session_id.trim().is_empty() {
            return Err(SessionError::InvalidSessionId(params.session_id));
        }
        Ok(ChatSession::new(params.session_id))
    }

    async fn on_update(&mut self, update: SessionUpdate, _ctx: &()) -> Result<(), SessionError> {
        if let Some(active) = update.is_active {
            self.is_active = active;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        _ctx: &(),
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::Append { sender, content } => {
                if !self.is_active {
                    return Err(SessionError::Closed(self.session_id.clone()));
                }
                if content.trim().is_empty() {
                    return Err(SessionError::EmptyMessage);
                }
                Ok(SessionActionResult::Append(self.push(sender, content)))
            }
            SessionAction::History => Ok(SessionActionResult::History(self.messages.clone())),
        }
    }
}
