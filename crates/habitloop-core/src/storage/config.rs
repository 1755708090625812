//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - The first-run seed habit list
//! - Notification preferences (the CLI's permission gate)
//!
//! Configuration is stored at `~/.config/habitloop/config.toml`.

use serde::{Deserialize, Serialize};

use super::data_dir;

/// First-run seeding configuration.
///
/// The seed list is materialized into the habit store only when the
/// `habits` blob has never been written; after that the store owns the
/// collection and this list is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_habits")]
    pub habits: Vec<String>,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Whether local notifications may be scheduled. Acts as the
    /// permission gate for the CLI's notification gateway.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Body used when the user saves a reminder without a message.
    #[serde(default = "default_reminder_message")]
    pub default_message: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitloop/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_reminder_message() -> String {
    "Don't forget to track your habits!".into()
}
fn default_seed_habits() -> Vec<String> {
    [
        "Drink 1.5L of water",
        "Exercise",
        "Take protein drink",
        "Complete 1 meaningful work task",
        "Stretch",
        "Quality time with kids or Colin",
        "Read",
        "Sleep by 10:30 PM",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            habits: default_seed_habits(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_message: default_reminder_message(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SeedConfig::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be parsed or the
    /// default config cannot be written.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
