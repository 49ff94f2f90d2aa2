//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by
//! `RUST_LOG`. The crate/module prefix is hidden (`with_target(false)`), so
//! log lines stay short while the structured fields carry the context.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, final entity count
//! - **Entity operations**: create, get, update, delete and custom actions
//! - **Replies**: the tracking number found, whether the model or the
//!   fallback composer answered, and model failures
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Full payloads and per-request actor logs
//! RUST_LOG=debug cargo run
//!
//! # Only the assistant pipeline
//! RUST_LOG=parcel_support::assistant=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a fallback reply to a tracking question looks like:
//!
//! ```text
//! INFO New message session_id=4f0c… message=Cek resi FDE123456789
//! WARN respond: Language model failed, using fallback error=Language model did not answer within 10s
//! INFO Reply generated session_id=4f0c… source="fallback" response=✅ **Paket Terkirim!** …
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
