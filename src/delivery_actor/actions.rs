//! Custom actions for the Delivery actor.
//!
//! These are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action) on
//! [`DeliveryRecord`](crate::model::DeliveryRecord).

/// Custom actions for delivery records.
#[derive(Debug, Clone)]
pub enum DeliveryAction {
    /// Records the customer's rating.
    ///
    /// # Errors
    /// Fails unless the value is in `1..=5`; the stored rating is left untouched.
    Rate(u8),
}

/// Results from DeliveryActions - variants match 1:1 with DeliveryAction
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryActionResult {
    /// The rating that is now stored.
    Rate(u8),
}
