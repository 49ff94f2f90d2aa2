//! # FastDelivery Express support bot
//!
//! Interactive terminal demo. Type a message to chat, or:
//!
//! - `/rating <1-5> [komentar]` to rate the last tracked delivery
//! - `/history` to print the conversation so far
//! - `/quit` to leave
//!
//! Set `OPENAI_API_KEY` to answer through the language model; without it the
//! rule-based composer replies.

use parcel_support::config::Config;
use parcel_support::lifecycle::{seed_sample_deliveries, setup_tracing, SupportSystem};
use parcel_support::model::Sender;
use parcel_support::service::{ChatService, RatingRequest, ServiceError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    let system = SupportSystem::new(&config);

    let span = tracing::info_span!("seeding");
    seed_sample_deliveries(&system.deliveries)
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;

    info!(model = system.chat.has_model(), "Support bot ready");
    println!("FastDelivery Express - ketik pesan Anda (/rating, /history, /quit)");
    println!("Contoh: Cek resi FDE123456789\n");

    let mut session_id: Option<String> = None;
    let mut last_tracking: Option<String> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        let line = line.trim();
        let result = match line.split_once(' ').map_or((line, ""), |(c, rest)| (c, rest)) {
            ("/quit", _) => break,
            ("/history", _) => show_history(&system.chat, session_id.as_deref()).await,
            ("/rating", args) => {
                rate(&system.chat, args, last_tracking.as_deref(), session_id.as_deref()).await
            }
            _ => match system.chat.send_message(line, session_id.as_deref()).await {
                Ok(reply) => {
                    if reply.tracking_number.is_some() {
                        last_tracking = reply.tracking_number;
                    }
                    session_id = Some(reply.session_id);
                    println!("\n{}\n", reply.response);
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };

        if let Err(e) = result {
            print_error(&e);
        }
    }

    if let Some(id) = session_id.as_deref() {
        if let Err(e) = system.chat.end_session(id).await {
            warn!(error = %e, "Could not close session");
        }
    }

    system.shutdown().await?;
    info!("Goodbye");
    Ok(())
}

async fn rate(
    chat: &ChatService,
    args: &str,
    tracking_number: Option<&str>,
    session_id: Option<&str>,
) -> Result<(), ServiceError> {
    let (score, comment) = args.trim().split_once(' ').unwrap_or((args.trim(), ""));
    let rating = score.parse::<i64>().unwrap_or(0);

    let receipt = chat
        .submit_rating(RatingRequest {
            rating,
            comment: comment.to_string(),
            tracking_number: tracking_number.map(str::to_string),
            session_id: session_id.map(str::to_string),
        })
        .await?;
    println!("\n{}\n", receipt.response);
    Ok(())
}

async fn show_history(chat: &ChatService, session_id: Option<&str>) -> Result<(), ServiceError> {
    let Some(session_id) = session_id else {
        println!("(belum ada percakapan)");
        return Ok(());
    };
    for message in chat.chat_history(session_id).await? {
        let who = match message.sender {
            Sender::User => "Anda",
            Sender::Bot => "Bot",
        };
        println!("[{}] {}: {}", message.timestamp.format("%H:%M:%S"), who, message.content);
    }
    Ok(())
}

fn print_error(e: &ServiceError) {
    println!("\n⚠️ {e}");
    if let Some(fallback) = e.fallback_response() {
        println!("{fallback}");
    }
    println!();
}
