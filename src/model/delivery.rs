/// Delivery tracking records and their lifecycle DTOs.
///
/// # Actor Framework
/// [`DeliveryRecord`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// keyed by its tracking number.
///
/// See [`impl ActorEntity for DeliveryRecord`](#impl-ActorEntity-for-DeliveryRecord) for:
/// - Creation parameters ([`DeliveryCreate`])
/// - Update parameters ([`DeliveryUpdate`])
/// - Custom actions ([`DeliveryAction`](crate::delivery_actor::DeliveryAction))
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Label used for status codes that are not part of [`DeliveryStatus`].
pub const UNKNOWN_STATUS_LABEL: &str = "Status tidak diketahui";

/// Where a parcel is in its journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    PickedUp,
    InTransit,
    InWarehouse,
    OutForDelivery,
    Delivered,
    Damaged,
    Delayed,
    Lost,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 8] = [
        DeliveryStatus::PickedUp,
        DeliveryStatus::InTransit,
        DeliveryStatus::InWarehouse,
        DeliveryStatus::OutForDelivery,
        DeliveryStatus::Delivered,
        DeliveryStatus::Damaged,
        DeliveryStatus::Delayed,
        DeliveryStatus::Lost,
    ];

    /// Wire code, e.g. `out_for_delivery`.
    pub fn code(self) -> &'static str {
        match self {
            DeliveryStatus::PickedUp => "picked_up",
            DeliveryStatus::InTransit => "in_transit",
            DeliveryStatus::InWarehouse => "in_warehouse",
            DeliveryStatus::OutForDelivery => "out_for_delivery",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Damaged => "damaged",
            DeliveryStatus::Delayed => "delayed",
            DeliveryStatus::Lost => "lost",
        }
    }

    /// Customer-facing description of the status.
    pub fn label(self) -> &'static str {
        match self {
            DeliveryStatus::PickedUp => "Paket sudah diambil dari pengirim",
            DeliveryStatus::InTransit => "Paket sedang dalam perjalanan",
            DeliveryStatus::InWarehouse => "Paket berada di gudang sortir",
            DeliveryStatus::OutForDelivery => "Paket sedang dikirim ke alamat tujuan",
            DeliveryStatus::Delivered => "Paket sudah berhasil terkirim",
            DeliveryStatus::Damaged => "Paket mengalami kerusakan",
            DeliveryStatus::Delayed => "Pengiriman mengalami keterlambatan",
            DeliveryStatus::Lost => "Paket hilang",
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a status code is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown delivery status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for DeliveryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Customer-facing label for a raw status code; unknown codes get
/// [`UNKNOWN_STATUS_LABEL`].
pub fn status_label(code: &str) -> &'static str {
    code.parse::<DeliveryStatus>()
        .map(DeliveryStatus::label)
        .unwrap_or(UNKNOWN_STATUS_LABEL)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub tracking_number: String,
    pub status: DeliveryStatus,
    pub current_location: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    /// Free-text problem description; empty when there is none.
    pub issues: String,
    /// Customer rating in `1..=5`, once given.
    pub rating: Option<u8>,
    pub delivery_date: Option<DateTime<Utc>>,
}

impl DeliveryRecord {
    /// Whether the record carries a problem description.
    pub fn has_issues(&self) -> bool {
        !self.issues.trim().is_empty()
    }
}

/// Payload for storing a new delivery record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryCreate {
    pub tracking_number: String,
    pub status: DeliveryStatus,
    pub current_location: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    #[serde(default)]
    pub issues: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub delivery_date: Option<DateTime<Utc>>,
}

/// Partial update of a delivery record's tracking state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryUpdate {
    pub status: Option<DeliveryStatus>,
    pub current_location: Option<String>,
    pub issues: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
}
