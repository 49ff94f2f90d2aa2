//! [`ActorEntity`] implementation for [`DeliveryRecord`].

use super::actions::{DeliveryAction, DeliveryActionResult};
use super::error::DeliveryError;
use crate::framework::ActorEntity;
use crate::model::{DeliveryCreate, DeliveryRecord, DeliveryUpdate};
use async_trait::async_trait;

/// Valid customer ratings.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[async_trait]
impl ActorEntity for DeliveryRecord {
    type Id = String;
    type Create = DeliveryCreate;
    type Update = DeliveryUpdate;
    type Action = DeliveryAction;
    type ActionResult = DeliveryActionResult;
    type Context = ();
    type Error = DeliveryError;

    fn id(&self) -> String {
        self.tracking_number.clone()
    }

    /// Validates the tracking number and the optional seeded rating.
    fn from_create_params(params: DeliveryCreate) -> Result<Self, DeliveryError> {
        let tracking_number = params.tracking_number.trim().to_string();
        if tracking_number.is_empty() {
            return Err(DeliveryError::InvalidTrackingNumber(params.tracking_number));
        }
        if let Some(rating) = params.rating {
            if !RATING_RANGE.contains(&rating) {
                return Err(DeliveryError::InvalidRating(rating));
            }
        }
        Ok(Self {
            tracking_number,
            status: params.status,
            current_location: params.current_location,
            recipient_name: params.recipient_name,
            recipient_phone: params.recipient_phone,
            issues: params.issues,
            rating: params.rating,
            delivery_date: params.delivery_date,
        })
    }

    async fn on_update(&mut self, update: DeliveryUpdate, _ctx: &()) -> Result<(), DeliveryError> {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(location) = update.current_location {
            self.current_location = location;
        }
        if let Some(issues) = update.issues {
            self.issues = issues;
        }
        if let Some(date) = update.delivery_date {
            self.delivery_date = Some(date);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DeliveryAction,
        _ctx: &(),
    ) -> Result<DeliveryActionResult, DeliveryError> {
        match action {
            DeliveryAction::Rate(rating) => {
                if !RATING_RANGE.contains(&rating) {
                    return Err(DeliveryError::InvalidRating(rating));
                }
                self.rating = Some(rating);
                Ok(DeliveryActionResult::Rate(rating))
            }
        }
    }
}
