//! Configuration management for the Neon Orbit CLI
//!
//! Stores the data directory, an optional RNG seed, and reply behavior in
//! ~/.config/neon-orbit/config.toml. `NEON_ORBIT_DATA_DIR` and
//! `NEON_ORBIT_SEED` override the file; command-line flags override both.

use anyhow::{Context, Result};
use neon_orbit::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "neon-orbit";
const CONFIG_FILE: &str = "config.toml";

pub const DATA_DIR_ENV: &str = "NEON_ORBIT_DATA_DIR";
pub const SEED_ENV: &str = "NEON_ORBIT_SEED";

/// CLI Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the state file lives (defaults to the platform data dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Fixed seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Drop pending replies of a blocked profile's chat
    #[serde(default)]
    pub cancel_replies_on_block: bool,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Apply environment overrides
    pub fn apply_env(self) -> Result<Self> {
        self.with_env_values(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(SEED_ENV).ok(),
        )
    }

    fn with_env_values(mut self, data_dir: Option<String>, seed: Option<String>) -> Result<Self> {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(seed) = seed.filter(|s| !s.trim().is_empty()) {
            let seed = seed.trim().parse().with_context(|| {
                format!("{} must be an unsigned integer, got '{}'", SEED_ENV, seed)
            })?;
            self.seed = Some(seed);
        }
        Ok(self)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, seed: Option<u64>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("Could not determine data directory")?
                .join(CONFIG_DIR)),
        }
    }

    /// Session settings derived from this config
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            cancel_replies_on_block: self.cancel_replies_on_block,
            ..SessionConfig::default()
        }
    }
}
