//! Error types for the Delivery actor.

use thiserror::Error;

/// Errors that can occur during delivery record operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// The tracking number is empty or blank.
    #[error("Invalid tracking number: {0:?}")]
    InvalidTrackingNumber(String),

    /// A rating outside the 1-5 scale was supplied.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// A record with this tracking number is already stored.
    #[error("Delivery already exists: {0}")]
    AlreadyExists(String),

    /// The requested record was not found.
    #[error("Delivery not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DeliveryError {
    fn from(msg: String) -> Self {
        DeliveryError::ActorCommunicationError(msg)
    }
}
