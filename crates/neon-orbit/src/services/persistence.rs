//! Persistence Store - versioned state record
//!
//! The whole [`State`] lives under one key whose name carries the schema
//! version. Reads never fail: a missing, unreadable or malformed record
//! yields the default state.

use crate::domain::{DomainError, State, StoredState};
use crate::ports::KeyValueStore;

/// Storage key of the state record. The suffix is the schema version.
pub const STATE_KEY: &str = "neon_orbit_state_v1";

/// Loads and saves the state record through a [`KeyValueStore`]
pub struct StatePersistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StatePersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the state, merged over defaults
    pub fn load(&self) -> State {
        let raw = match self.store.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored state, starting from defaults");
                return State::default();
            }
            Err(e) => {
                tracing::warn!("Could not read stored state, using defaults: {}", e);
                return State::default();
            }
        };

        match serde_json::from_str::<StoredState>(&raw) {
            Ok(stored) => State::merge_stored(stored),
            Err(e) => {
                tracing::warn!("Discarding malformed stored state: {}", e);
                State::default()
            }
        }
    }

    /// Write the full state, replacing the previous record
    pub fn save(&mut self, state: &State) -> Result<(), DomainError> {
        let blob = serde_json::to_string(state)?;
        self.store.set(STATE_KEY, &blob)?;
        tracing::debug!("State saved ({} bytes)", blob.len());
        Ok(())
    }

    /// Delete the stored record
    pub fn clear(&mut self) -> Result<bool, DomainError> {
        self.store.remove(STATE_KEY)
    }
}
