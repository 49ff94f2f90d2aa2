//! # Delivery Client
//!
//! High-level API over the delivery record actor. It is also the production
//! [`DeliveryStore`] behind the tracking lookup.
use crate::assistant::DeliveryStore;
use crate::clients::actor_client::ActorClient;
use crate::delivery_actor::{DeliveryAction, DeliveryActionResult, DeliveryError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{DeliveryCreate, DeliveryRecord, DeliveryUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Delivery actor.
#[derive(Clone)]
pub struct DeliveryClient {
    inner: ResourceClient<DeliveryRecord>,
}

impl DeliveryClient {
    pub fn new(inner: ResourceClient<DeliveryRecord>) -> Self {
        Self { inner }
    }

    /// Stores a new record and returns its tracking number.
    #[instrument(skip(self, params), fields(tracking_number = %params.tracking_number))]
    pub async fn create_delivery(&self, params: DeliveryCreate) -> Result<String, DeliveryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Exact-match lookup by tracking number.
    #[instrument(skip(self))]
    pub async fn find(&self, tracking_number: &str) -> Result<Option<DeliveryRecord>, DeliveryError> {
        self.get(tracking_number.to_string()).await
    }

    /// Applies a tracking update; fields left as `None` keep their value.
    #[instrument(skip(self, update))]
    pub async fn update_tracking(
        &self,
        tracking_number: &str,
        update: DeliveryUpdate,
    ) -> Result<DeliveryRecord, DeliveryError> {
        debug!("Sending request");
        self.inner
            .update(tracking_number.to_string(), update)
            .await
            .map_err(Self::map_error)
    }

    /// Stores the customer's rating for a delivery.
    ///
    /// Returns the stored rating, or [`DeliveryError::InvalidRating`] when the value
    /// is outside `1..=5`.
    #[instrument(skip(self))]
    pub async fn rate(&self, tracking_number: &str, rating: u8) -> Result<u8, DeliveryError> {
        debug!(rating, "Rating delivery");
        match self
            .inner
            .perform_action(tracking_number.to_string(), DeliveryAction::Rate(rating))
            .await
        {
            Ok(DeliveryActionResult::Rate(stored)) => Ok(stored),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<DeliveryRecord> for DeliveryClient {
    type Error = DeliveryError;

    fn inner(&self) -> &ResourceClient<DeliveryRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DeliveryError::NotFound(id),
            FrameworkError::AlreadyExists(id) => DeliveryError::AlreadyExists(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<DeliveryError>() {
                Ok(err) => *err,
                Err(other) => DeliveryError::ActorCommunicationError(other.to_string()),
            },
            other => DeliveryError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl DeliveryStore for DeliveryClient {
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<DeliveryRecord>, DeliveryError> {
        self.find(tracking_number).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::DeliveryStatus;

    fn record(tracking_number: &str) -> DeliveryRecord {
        DeliveryRecord {
            tracking_number: tracking_number.to_string(),
            status: DeliveryStatus::Delivered,
            current_location: "Jakarta Pusat".to_string(),
            recipient_name: "Budi Santoso".to_string(),
            recipient_phone: "081234567890".to_string(),
            issues: String::new(),
            rating: None,
            delivery_date: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_tracking_number_returns_stored_record() {
        let mut mock = MockClient::<DeliveryRecord>::new();
        mock.expect_get("FDE123456789".to_string())
            .return_ok(Some(record("FDE123456789")));
        mock.expect_get("NOPE12345678".to_string()).return_ok(None);

        let client = DeliveryClient::new(mock.client());
        let found = client.find_by_tracking_number("FDE123456789").await.unwrap();
        assert_eq!(found.unwrap().recipient_name, "Budi Santoso");
        assert!(client.find_by_tracking_number("NOPE12345678").await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_update_tracking_returns_updated_record() {
        let mut updated = record("FDE987654321");
        updated.status = DeliveryStatus::OutForDelivery;
        updated.current_location = "Sidoarjo".to_string();

        let mut mock = MockClient::<DeliveryRecord>::new();
        mock.expect_update("FDE987654321".to_string())
            .return_ok(updated.clone());

        let client = DeliveryClient::new(mock.client());
        let result = client
            .update_tracking(
                "FDE987654321",
                DeliveryUpdate {
                    status: Some(DeliveryStatus::OutForDelivery),
                    current_location: Some("Sidoarjo".to_string()),
                    ..DeliveryUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(result, updated);

        mock.verify();
    }

    #[tokio::test]
    async fn test_rate_sends_rate_action() {
        let (generic, mut receiver) = create_mock_client::<DeliveryRecord>(10);
        let client = DeliveryClient::new(generic);

        let task = tokio::spawn(async move { client.rate("FDE123456789", 4).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "FDE123456789");
        assert!(matches!(action, DeliveryAction::Rate(4)));
        responder.send(Ok(DeliveryActionResult::Rate(4))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_entity_errors_are_unwrapped() {
        let mut mock = MockClient::<DeliveryRecord>::new();
        mock.expect_action("FDE123456789".to_string())
            .return_err(FrameworkError::EntityError(Box::new(DeliveryError::InvalidRating(9))));
        mock.expect_action("MISSING00001".to_string())
            .return_err(FrameworkError::NotFound("MISSING00001".to_string()));

        let client = DeliveryClient::new(mock.client());
        assert_eq!(
            client.rate("FDE123456789", 9).await,
            Err(DeliveryError::InvalidRating(9))
        );
        assert_eq!(
            client.rate("MISSING00001", 5).await,
            Err(DeliveryError::NotFound("MISSING00001".to_string()))
        );
    }
}
