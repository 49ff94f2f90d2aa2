//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod delivery;
pub mod session;

pub use delivery::*;
pub use session::*;
