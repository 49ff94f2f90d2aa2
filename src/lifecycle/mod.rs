//! Starting, seeding and stopping the support system.

pub mod seed;
pub mod support_system;
pub mod tracing;

pub use seed::{sample_deliveries, seed_sample_deliveries};
pub use support_system::SupportSystem;
pub use self::tracing::setup_tracing;
