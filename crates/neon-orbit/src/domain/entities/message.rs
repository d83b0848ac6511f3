//! Message Entity
//!
//! One line of a chat transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Them,
}

/// A message in a transcript. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: Sender,
    /// Text after the safety filter ran
    pub text: String,
    pub ts: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with the current time
    pub fn new(from: Sender, text: impl Into<String>) -> Self {
        Self {
            from,
            text: text.into(),
            ts: Utc::now(),
        }
    }
}
