use async_trait::async_trait;
use parcel_support::assistant::{compose, RandomSource, ReplySource};
use parcel_support::clients::actor_client::ActorClient;
use parcel_support::config::Config;
use parcel_support::lifecycle::{seed_sample_deliveries, SupportSystem};
use parcel_support::llm::{CompletionRequest, LanguageModel, ModelError};
use parcel_support::model::{DeliveryStatus, DeliveryUpdate, Sender};
use parcel_support::service::{RatingRequest, ServiceError};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

async fn seeded_system() -> SupportSystem {
    let system = SupportSystem::with_parts(&Config::default(), None, RandomSource::seeded(11));
    seed_sample_deliveries(&system.deliveries)
        .await
        .expect("Failed to seed deliveries");
    system
}

struct HangingModel;

#[async_trait]
impl LanguageModel for HangingModel {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, ModelError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("never".to_string())
    }

    fn model_name(&self) -> &str {
        "hanging"
    }
}

struct CannedModel;

#[async_trait]
impl LanguageModel for CannedModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ModelError> {
        assert!(request.user_prompt.contains("DATA PENGIRIMAN"));
        Ok("  Paket Anda sudah sampai, terima kasih! 😊 ".to_string())
    }

    fn model_name(&self) -> &str {
        "canned"
    }
}

#[tokio::test]
async fn test_tracking_question_for_delivered_parcel() {
    let system = seeded_system().await;

    let reply = system
        .chat
        .send_message("Cek resi FDE123456789", None)
        .await
        .expect("Failed to send message");

    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(reply.tracking_number.as_deref(), Some("FDE123456789"));
    assert_eq!(reply.delivery.as_ref().map(|d| d.status), Some(DeliveryStatus::Delivered));
    assert!(reply.response.contains("FDE123456789"));
    assert!(reply.response.contains("Paket Terkirim"));
    assert!(reply.response.contains("rating 1-5 bintang"));
    assert_eq!(reply.message_id, 2);

    let history = system.chat.chat_history(&reply.session_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sender, Sender::User);
    assert_eq!(history[0].content, "Cek resi FDE123456789");
    assert_eq!(history[1].sender, Sender::Bot);
    assert_eq!(history[1].content, reply.response);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_damage_report_without_tracking_number() {
    let system = seeded_system().await;

    let reply = system
        .chat
        .send_message("paket saya rusak", Some("s-damage"))
        .await
        .unwrap();

    assert_eq!(reply.session_id, "s-damage");
    assert_eq!(reply.tracking_number, None);
    assert_eq!(reply.response, compose("paket saya rusak", None));
    assert!(reply.response.contains("1500-888"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_message_never_reaches_the_assistant() {
    let system = seeded_system().await;

    let err = system.chat.send_message("   ", Some("s-empty")).await.unwrap_err();
    assert_eq!(err, ServiceError::EmptyMessage);
    assert_eq!(err.to_string(), "Pesan tidak boleh kosong");

    // No session was opened for the rejected message.
    assert_eq!(system.sessions.get("s-empty".to_string()).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_message_length_limit() {
    let config = Config {
        max_message_chars: 20,
        ..Config::default()
    };
    let system = SupportSystem::with_parts(&config, None, RandomSource::seeded(1));

    let err = system
        .chat
        .send_message("a".repeat(21).as_str(), None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Pesan terlalu panjang (maksimal 20 karakter)");
    assert!(system.chat.send_message(&"a".repeat(20), None).await.is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_tracking_number_is_synthesized_not_stored() {
    let system = seeded_system().await;

    let reply = system
        .chat
        .send_message("Halo, cek resi UNKNOWN999XYZ", None)
        .await
        .unwrap();

    let delivery = reply.delivery.clone().expect("synthesized delivery");
    assert_eq!(delivery.tracking_number, "UNKNOWN999XYZ");
    assert_ne!(delivery.status, DeliveryStatus::Damaged);
    assert_ne!(delivery.status, DeliveryStatus::Lost);
    assert_eq!(reply.response, compose("Halo, cek resi UNKNOWN999XYZ", Some(&delivery)));

    let stored = system.deliveries.find("UNKNOWN999XYZ").await.unwrap();
    assert_eq!(stored, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_model_timeout_matches_unconfigured_reply() {
    let config = Config {
        model_timeout: Duration::from_millis(100),
        ..Config::default()
    };
    let with_model =
        SupportSystem::with_parts(&config, Some(Arc::new(HangingModel)), RandomSource::seeded(5));
    let without_model = SupportSystem::with_parts(&config, None, RandomSource::seeded(5));
    seed_sample_deliveries(&with_model.deliveries).await.unwrap();
    seed_sample_deliveries(&without_model.deliveries).await.unwrap();

    let message = "Cek resi FDE456789123";
    let timed_out = with_model.chat.send_message(message, None).await.unwrap();
    let fallback = without_model.chat.send_message(message, None).await.unwrap();

    assert_eq!(timed_out.source, ReplySource::Fallback);
    assert_eq!(timed_out.response, fallback.response);
    assert!(timed_out.response.contains("Paket basah karena hujan"));

    with_model.shutdown().await.unwrap();
    without_model.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_model_reply_is_persisted() {
    let system =
        SupportSystem::with_parts(&Config::default(), Some(Arc::new(CannedModel)), RandomSource::seeded(2));
    seed_sample_deliveries(&system.deliveries).await.unwrap();

    let reply = system
        .chat
        .send_message("lacak FDE987654321", None)
        .await
        .unwrap();
    assert_eq!(reply.source, ReplySource::Model);
    assert_eq!(reply.response, "Paket Anda sudah sampai, terima kasih! 😊");

    let history = system.chat.chat_history(&reply.session_id).await.unwrap();
    assert_eq!(history[1].content, reply.response);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rating_is_saved_and_appended_to_session() {
    let system = seeded_system().await;
    let reply = system
        .chat
        .send_message("Cek resi FDE987654321", None)
        .await
        .unwrap();

    let receipt = system
        .chat
        .submit_rating(RatingRequest {
            rating: 5,
            comment: "Cepat sekali".to_string(),
            tracking_number: Some("FDE987654321".to_string()),
            session_id: Some(reply.session_id.clone()),
        })
        .await
        .unwrap();

    assert!(receipt.rating_saved);
    assert!(receipt.response.contains("rating 5 bintang!"));
    assert!(receipt.response.contains("Komentar Anda: 'Cepat sekali'"));

    let record = system.deliveries.find("FDE987654321").await.unwrap().unwrap();
    assert_eq!(record.rating, Some(5));

    let history = system.chat.chat_history(&reply.session_id).await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].content, receipt.response);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rating_edge_cases() {
    let system = seeded_system().await;

    let receipt = system
        .chat
        .submit_rating(RatingRequest {
            rating: 2,
            comment: String::new(),
            tracking_number: Some("FDE000000000".to_string()),
            session_id: Some("no-such-session".to_string()),
        })
        .await
        .unwrap();
    assert!(!receipt.rating_saved);
    assert!(receipt.response.contains("Hubungi 1500-888"));

    let err = system
        .chat
        .submit_rating(RatingRequest {
            rating: 6,
            comment: String::new(),
            tracking_number: Some("FDE123456789".to_string()),
            session_id: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Rating harus berupa angka 1-5");

    let record = system.deliveries.find("FDE123456789").await.unwrap().unwrap();
    assert_eq!(record.rating, Some(5));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_history_of_unknown_session() {
    let system = seeded_system().await;

    let err = system.chat.chat_history("does-not-exist").await.unwrap_err();
    assert_eq!(err, ServiceError::SessionNotFound("does-not-exist".to_string()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_closed_session_rejects_messages() {
    let system = seeded_system().await;

    let reply = system.chat.send_message("halo", None).await.unwrap();
    system.chat.end_session(&reply.session_id).await.unwrap();

    let err = system
        .chat
        .send_message("halo lagi", Some(&reply.session_id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::SessionClosed(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_messages_on_one_session() {
    let system = seeded_system().await;
    let session_id = "s-busy";

    let mut tasks = Vec::new();
    for i in 0..20 {
        let chat = system.chat.clone();
        tasks.push(tokio::spawn(async move {
            chat.send_message(&format!("pesan nomor {i}"), Some(session_id))
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().expect("send_message failed");
    }

    let history = system.chat.chat_history(session_id).await.unwrap();
    assert_eq!(history.len(), 40);

    let ids: HashSet<u64> = history.iter().map(|m| m.id).collect();
    assert_eq!(ids, (1..=40).collect::<HashSet<u64>>());
    assert!(history.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(history.iter().filter(|m| m.is_user()).count(), 20);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_tracking_update_keeps_untouched_fields() {
    let system = seeded_system().await;
    let before = system.deliveries.find("FDE987654321").await.unwrap().unwrap();

    let after = system
        .deliveries
        .update_tracking(
            "FDE987654321",
            DeliveryUpdate {
                status: Some(DeliveryStatus::OutForDelivery),
                current_location: Some("Sidoarjo".to_string()),
                ..DeliveryUpdate::default()
            },
        )
        .await
        .expect("Failed to update delivery");

    assert_eq!(after.status, DeliveryStatus::OutForDelivery);
    assert_eq!(after.current_location, "Sidoarjo");
    assert_eq!(after.recipient_name, before.recipient_name);
    assert_eq!(after.recipient_phone, before.recipient_phone);
    assert_eq!(after.rating, before.rating);
    assert_eq!(system.deliveries.find("FDE987654321").await.unwrap(), Some(after));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let system = SupportSystem::with_parts(&Config::default(), None, RandomSource::default());

    assert_eq!(seed_sample_deliveries(&system.deliveries).await.unwrap(), 3);
    assert_eq!(seed_sample_deliveries(&system.deliveries).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}
