use crate::clients::DeliveryClient;
use crate::delivery_actor::DeliveryError;
use crate::model::{DeliveryCreate, DeliveryStatus};
use chrono::Utc;
use tracing::{debug, info};

/// The demo delivery records.
pub fn sample_deliveries() -> Vec<DeliveryCreate> {
    vec![
        DeliveryCreate {
            tracking_number: "FDE123456789".to_string(),
            status: DeliveryStatus::Delivered,
            current_location: "Jakarta Pusat".to_string(),
            recipient_name: "Budi Santoso".to_string(),
            recipient_phone: "081234567890".to_string(),
            issues: String::new(),
            rating: Some(5),
            delivery_date: Some(Utc::now()),
        },
        DeliveryCreate {
            tracking_number: "FDE987654321".to_string(),
            status: DeliveryStatus::InTransit,
            current_location: "Surabaya".to_string(),
            recipient_name: "Siti Rahayu".to_string(),
            recipient_phone: "081987654321".to_string(),
            issues: String::new(),
            rating: None,
            delivery_date: None,
        },
        DeliveryCreate {
            tracking_number: "FDE456789123".to_string(),
            status: DeliveryStatus::Damaged,
            current_location: "Bandung".to_string(),
            recipient_name: "Andi Wijaya".to_string(),
            recipient_phone: "081456789123".to_string(),
            issues: "Paket basah karena hujan".to_string(),
            rating: Some(2),
            delivery_date: None,
        },
    ]
}

/// Stores the demo records, skipping ones already present. Returns how many
/// were inserted.
pub async fn seed_sample_deliveries(client: &DeliveryClient) -> Result<usize, DeliveryError> {
    let mut inserted = 0;
    for params in sample_deliveries() {
        let tracking_number = params.tracking_number.clone();
        match client.create_delivery(params).await {
            Ok(_) => inserted += 1,
            Err(DeliveryError::AlreadyExists(_)) => {
                debug!(tracking_number = %tracking_number, "Sample delivery already present");
            }
            Err(e) => return Err(e),
        }
    }
    info!(inserted, "Sample deliveries seeded");
    Ok(inserted)
}
