//! Domain Errors
//!
//! Error types for session and engine operations.

use thiserror::Error;

use super::value_objects::Screen;

/// Domain layer errors
///
/// Every variant is recoverable: the caller surfaces a notice or keeps the
/// current screen, and the state is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Action '{action}' is not available on the {screen} screen")]
    InvalidAction {
        action: &'static str,
        screen: Screen,
    },

    #[error("No candidate profile is on display")]
    NoCandidate,

    #[error("No active match")]
    NoActiveMatch,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn invalid_action(action: &'static str, screen: Screen) -> Self {
        Self::InvalidAction { action, screen }
    }

    pub fn storage<E: std::fmt::Display>(err: E) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
