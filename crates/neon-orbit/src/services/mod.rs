//! Services
//!
//! The engines that act on [`State`](crate::domain::State), and the session
//! that drives them.

pub mod chat;
pub mod generator;
pub mod matching;
pub mod persistence;
pub mod safety;
pub mod session;

// Re-exports
pub use chat::{ChatEngine, PendingReply, ReplyConfig, ReplyTrigger};
pub use matching::{LikeOutcome, MatchConfig, MatchingEngine};
pub use persistence::{StatePersistence, STATE_KEY};
pub use safety::redact;
pub use session::{Session, SessionConfig, SessionView};
