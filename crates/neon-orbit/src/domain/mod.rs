//! Domain Layer
//!
//! Pure domain types without storage or randomness dependencies.
//! Contains entities, value objects, and errors.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
