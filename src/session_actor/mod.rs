//! # Session Actor
//!
//! Owns chat sessions and their turns, keyed by session id.
//!
//! Because the actor handles one request at a time, two messages arriving for the
//! same session are appended in the order the actor receives them; no lock is
//! involved.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for
//!   [`ChatSession`]
//! - [`error`] - [`SessionError`] type
//! - [`actions`] - [`SessionAction`] for appending turns and reading history
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::SessionClient;
use crate::framework::ResourceActor;
use crate::model::ChatSession;

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ChatSession>, SessionClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SessionClient::new(generic_client))
}
