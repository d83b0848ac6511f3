//! Neon Orbit Core Library
//!
//! Session engine and matching/chat simulator for the Neon Orbit demo: a
//! user builds a profile, browses generated candidates, likes them to get a
//! match by chance, and chats with a simulated counterpart. Everything lives
//! in one local store.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure types
//!   - `entities/`: UserProfile, Profile, Message, State
//!   - `value_objects/`: Goal, Theme, SafetyMode, Screen
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: KeyValueStore
//!   - `services/`: RandomSource
//!
//! - **Adapters** (`adapters/`): FileStore, MemoryStore, RngSource
//!
//! - **Services** (`services/`): persistence, safety filter, profile
//!   generator, matching, chat, and the session state machine
//!
//! # Usage
//!
//! ```rust,ignore
//! use neon_orbit::{FileStore, Goal, RngSource, Session};
//!
//! let mut session = Session::new(FileStore::new("data"), RngSource::from_os(), None);
//! session.start_onboarding("Ava", Some(20), Goal::Dating)?;
//! let outcome = session.like()?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use adapters::{DefaultRandom, FileStore, MemoryStore, RngSource};
pub use domain::{
    chat_id_for, DomainError, Goal, Message, Profile, SafetyMode, Screen, Sender, State, Theme,
    UserProfile,
};
pub use ports::{KeyValueStore, RandomSource};
pub use services::{
    redact, LikeOutcome, Session, SessionConfig, SessionView, StatePersistence, STATE_KEY,
};
