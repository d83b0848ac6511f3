//! Goal - What the user is looking for

use serde::{Deserialize, Serialize};

/// Stated goal of the user, used to flavor generated candidate descriptions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Chat,
    Dating,
    Friends,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Chat, Goal::Dating, Goal::Friends];
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Goal::Chat => write!(f, "chat"),
            Goal::Dating => write!(f, "dating"),
            Goal::Friends => write!(f, "friends"),
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(Goal::Chat),
            "dating" => Ok(Goal::Dating),
            "friends" => Ok(Goal::Friends),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}
