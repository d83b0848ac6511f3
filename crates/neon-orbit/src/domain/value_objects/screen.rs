//! Screen - the active step of the session

use serde::{Deserialize, Serialize};

/// Named screens of the session state machine. Exactly one is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Onboarding,
    Discover,
    Match,
    Chat,
    Settings,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Onboarding => write!(f, "onboarding"),
            Screen::Discover => write!(f, "discover"),
            Screen::Match => write!(f, "match"),
            Screen::Chat => write!(f, "chat"),
            Screen::Settings => write!(f, "settings"),
        }
    }
}
