//! Theme and SafetyMode - user-selectable settings

use serde::{Deserialize, Serialize};

/// Visual theme. Display-only; the core just stores it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Neon,
    Mono,
    Sunset,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Neon => write!(f, "neon"),
            Theme::Mono => write!(f, "mono"),
            Theme::Sunset => write!(f, "sunset"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neon" => Ok(Theme::Neon),
            "mono" => Ok(Theme::Mono),
            "sunset" => Ok(Theme::Sunset),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Content mode. `Safe` turns the redaction filter on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SafetyMode {
    #[default]
    Safe,
    Open,
}

impl std::fmt::Display for SafetyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyMode::Safe => write!(f, "safe"),
            SafetyMode::Open => write!(f, "open"),
        }
    }
}

impl std::str::FromStr for SafetyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Ok(SafetyMode::Safe),
            "open" => Ok(SafetyMode::Open),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}
