//! Delivery lookup with on-the-fly synthesis for unknown tracking numbers.

use crate::delivery_actor::DeliveryError;
use crate::model::{DeliveryRecord, DeliveryStatus};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Statuses a synthesized record may carry. `Damaged` and `Lost` are never
/// invented for a parcel the store does not know.
pub const SYNTHESIZED_STATUSES: [DeliveryStatus; 6] = [
    DeliveryStatus::PickedUp,
    DeliveryStatus::InTransit,
    DeliveryStatus::InWarehouse,
    DeliveryStatus::OutForDelivery,
    DeliveryStatus::Delivered,
    DeliveryStatus::Delayed,
];

pub const SYNTHESIZED_LOCATIONS: [&str; 6] = [
    "Jakarta",
    "Surabaya",
    "Medan",
    "Bandung",
    "Yogyakarta",
    "Denpasar",
];

pub const PLACEHOLDER_RECIPIENT: &str = "Customer";
pub const PLACEHOLDER_PHONE: &str = "081234567890";

/// Read access to stored delivery records.
#[async_trait]
pub trait DeliveryStore: Send + Sync {
    /// Exact-match lookup. `Ok(None)` means the store has no such record.
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<DeliveryRecord>, DeliveryError>;
}

/// A fixed, in-memory store.
#[async_trait]
impl DeliveryStore for HashMap<String, DeliveryRecord> {
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<DeliveryRecord>, DeliveryError> {
        Ok(self.get(tracking_number).cloned())
    }
}

#[async_trait]
impl<S: DeliveryStore + ?Sized> DeliveryStore for Arc<S> {
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<DeliveryRecord>, DeliveryError> {
        (**self).find_by_tracking_number(tracking_number).await
    }
}

/// Source of randomness for synthesis.
///
/// `Thread` draws from the calling thread's generator. `Seeded` shares one
/// deterministic generator, so tests can assert exact outcomes.
#[derive(Clone, Default)]
pub enum RandomSource {
    #[default]
    Thread,
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        RandomSource::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            RandomSource::Thread => f(&mut rand::thread_rng()),
            RandomSource::Seeded(rng) => {
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }
}

/// Builds a plausible record for a tracking number the store does not know.
pub fn synthesize_record<R: Rng + ?Sized>(tracking_number: &str, rng: &mut R) -> DeliveryRecord {
    let status = SYNTHESIZED_STATUSES
        .choose(rng)
        .copied()
        .unwrap_or(DeliveryStatus::InTransit);
    let location = SYNTHESIZED_LOCATIONS.choose(rng).copied().unwrap_or("Jakarta");

    DeliveryRecord {
        tracking_number: tracking_number.to_string(),
        status,
        current_location: location.to_string(),
        recipient_name: PLACEHOLDER_RECIPIENT.to_string(),
        recipient_phone: PLACEHOLDER_PHONE.to_string(),
        issues: String::new(),
        rating: None,
        delivery_date: None,
    }
}

/// Whether a resolved record came from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    Stored,
    Synthesized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDelivery {
    pub record: DeliveryRecord,
    pub origin: RecordOrigin,
}

/// Resolves tracking numbers to delivery records. Never fails.
pub struct DeliveryLookup<S> {
    store: S,
    random: RandomSource,
}

impl<S: DeliveryStore> DeliveryLookup<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            random: RandomSource::Thread,
        }
    }

    pub fn with_random(mut self, random: RandomSource) -> Self {
        self.random = random;
        self
    }

    /// Returns the stored record, or a synthesized one when the store has no
    /// match. A store failure is logged and treated like a miss.
    pub async fn resolve(&self, tracking_number: &str) -> ResolvedDelivery {
        match self.store.find_by_tracking_number(tracking_number).await {
            Ok(Some(record)) => {
                debug!(tracking_number, status = %record.status, "Delivery found");
                return ResolvedDelivery {
                    record,
                    origin: RecordOrigin::Stored,
                };
            }
            Ok(None) => {}
            Err(e) => warn!(tracking_number, error = %e, "Delivery store unavailable"),
        }

        let record = self
            .random
            .with_rng(|rng| synthesize_record(tracking_number, rng));
        debug!(tracking_number, status = %record.status, "Delivery synthesized");
        ResolvedDelivery {
            record,
            origin: RecordOrigin::Synthesized,
        }
    }
}
