//! Domain Entities
//!
//! - UserProfile: the user's own onboarding data
//! - Profile: generated candidate identity
//! - Message: one transcript line
//! - State: the persisted aggregate

mod message;
mod profile;
mod state;

pub use message::*;
pub use profile::*;
pub use state::*;
