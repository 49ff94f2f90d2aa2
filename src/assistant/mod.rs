//! Message interpretation and reply generation.
//!
//! A customer message flows through [`extractor`] (find a tracking number),
//! [`lookup`] (resolve or synthesize its delivery record), [`prompt`] and the
//! language model, and finally [`composer`] when the model is missing or fails.
//! [`orchestrator`] ties the steps together.

pub mod composer;
pub mod extractor;
pub mod lookup;
pub mod orchestrator;
pub mod prompt;

pub use composer::{compose, Intent, CALL_CENTER};
pub use extractor::{extract_tracking_number, find_tracking_number, TrackingMatch, TrackingPattern};
pub use lookup::{
    synthesize_record, DeliveryLookup, DeliveryStore, RandomSource, RecordOrigin, ResolvedDelivery,
};
pub use orchestrator::{ModelSettings, Reply, ReplySource, ResponseOrchestrator};
pub use prompt::{build_prompt, Prompt, SYSTEM_PROMPT};
