//! # Delivery Actor
//!
//! Owns the delivery tracking records, keyed by tracking number.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for
//!   [`DeliveryRecord`]
//! - [`error`] - [`DeliveryError`] type
//! - [`actions`] - [`DeliveryAction`] for recording a customer rating
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = delivery_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! client.create_delivery(params).await?;
//! let record = client.find("FDE123456789").await?;
//! client.rate("FDE123456789", 5).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::DeliveryClient;
use crate::framework::ResourceActor;
use crate::model::DeliveryRecord;

/// Creates a new Delivery actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<DeliveryRecord>, DeliveryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, DeliveryClient::new(generic_client))
}
