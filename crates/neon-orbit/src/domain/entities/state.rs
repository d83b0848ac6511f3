//! State - the single persisted aggregate
//!
//! Every component reads and mutates one `State`. The persisted layout is
//! the JSON form of this struct; [`StoredState`] is the lenient reading of
//! that layout used to fill missing fields from defaults.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::message::Message;
use super::profile::{Profile, UserProfile};
use crate::domain::value_objects::{SafetyMode, Theme};

/// Energy a fresh state starts with
pub const DEFAULT_ENERGY: u32 = 10;
/// Upper bound of the energy gauge
pub const MAX_ENERGY: u32 = 99;

/// The whole client-side state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub me: Option<UserProfile>,
    pub energy: u32,
    pub theme: Theme,
    pub mode: SafetyMode,
    pub current_profile: Option<Profile>,
    pub current_match: Option<Profile>,
    /// chat id -> transcript, oldest first
    pub chats: BTreeMap<String, Vec<Message>>,
    /// Blocked profile ids
    pub blocked: BTreeSet<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            me: None,
            energy: DEFAULT_ENERGY,
            theme: Theme::default(),
            mode: SafetyMode::default(),
            current_profile: None,
            current_match: None,
            chats: BTreeMap::new(),
            blocked: BTreeSet::new(),
        }
    }
}

impl State {
    /// Set energy, clamped into `[0, MAX_ENERGY]`
    pub fn set_energy(&mut self, value: i64) {
        self.energy = value.clamp(0, MAX_ENERGY as i64) as u32;
    }

    /// Transcript for a chat, empty if the chat does not exist yet
    pub fn transcript(&self, chat_id: &str) -> &[Message] {
        self.chats.get(chat_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_blocked(&self, profile_id: &str) -> bool {
        self.blocked.contains(profile_id)
    }

    /// Fill a stored record into the default shape. Stored values win.
    ///
    /// The merge is per top-level key: nested values such as `chats` are
    /// taken wholesale from storage when present.
    pub fn merge_stored(stored: StoredState) -> Self {
        let defaults = Self::default();
        let mut state = Self {
            me: stored.me.or(defaults.me),
            energy: defaults.energy,
            theme: stored.theme.unwrap_or(defaults.theme),
            mode: stored.mode.unwrap_or(defaults.mode),
            current_profile: stored.current_profile.or(defaults.current_profile),
            current_match: stored.current_match.or(defaults.current_match),
            chats: stored.chats.unwrap_or(defaults.chats),
            blocked: stored.blocked.unwrap_or(defaults.blocked),
        };
        if let Some(energy) = stored.energy {
            state.set_energy(energy);
        }
        state
    }
}

/// Lenient view of a persisted record: every key is optional and unknown
/// keys are ignored. A key holding the wrong type fails the whole parse.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredState {
    pub me: Option<UserProfile>,
    pub energy: Option<i64>,
    pub theme: Option<Theme>,
    pub mode: Option<SafetyMode>,
    pub current_profile: Option<Profile>,
    pub current_match: Option<Profile>,
    pub chats: Option<BTreeMap<String, Vec<Message>>>,
    pub blocked: Option<BTreeSet<String>>,
}
