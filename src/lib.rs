//! # Parcel Support
//!
//! > **Customer-support chat for FastDelivery Express.**
//!
//! A customer writes free text. The bot finds a tracking number in it, looks up
//! (or simulates) the delivery, and answers through a language model when one is
//! configured. Otherwise, or whenever the model fails, a deterministic rule-based
//! composer answers instead. Conversations and ratings are kept by resource
//! actors built on Tokio.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that owns entity state and processes requests
//! one at a time.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   and [`framework::mock`] for testing clients without actors.
//!
//! ### 2. The Actors ([`delivery_actor`], [`session_actor`])
//! Delivery records keyed by tracking number, chat sessions keyed by session id.
//! Data types live in [`model`]; typed wrappers in [`clients`].
//!
//! ### 3. The Assistant ([`assistant`])
//! Extraction, lookup, prompt building, the model call and the fallback
//! composer. [`ResponseOrchestrator::respond`](assistant::ResponseOrchestrator::respond)
//! always returns a non-empty reply.
//!
//! ### 4. The Surface ([`service`], [`llm`], [`config`], [`lifecycle`])
//! - [`service::ChatService`] validates input and persists turns and ratings.
//! - [`llm::OpenAiClient`] talks to an OpenAI-compatible endpoint.
//! - [`lifecycle::SupportSystem`] starts and stops everything.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Rule-based replies only
//! RUST_LOG=info cargo run
//!
//! # With the language model
//! OPENAI_API_KEY=sk-... RUST_LOG=info cargo run
//! ```

pub mod assistant;
pub mod clients;
pub mod config;
pub mod delivery_actor;
pub mod framework;
pub mod lifecycle;
pub mod llm;
pub mod model;
pub mod service;
pub mod session_actor;
