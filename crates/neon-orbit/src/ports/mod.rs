//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the core interacts with
//! durable storage and randomness.
//!
//! Implementations of these traits live in `adapters/`.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
