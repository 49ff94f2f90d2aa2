//! Generic actor framework for the support system's record stores.
//!
//! This module provides the building blocks used by the delivery store and the
//! chat-session store: a keyed in-memory map owned by a single Tokio task, and a
//! cloneable client that talks to it over a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stored record types implement
//! - [`ResourceActor`] - Generic actor that owns the records
//! - [`ResourceClient`] - Typed handle for sending requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
