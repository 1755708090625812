mod config;
mod store;

pub use config::{Config, NotificationsConfig, SeedConfig};
pub use store::Store;

use std::path::PathBuf;

/// Returns `~/.config/habitloop[-dev]/` based on HABITLOOP_ENV.
///
/// Set HABITLOOP_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITLOOP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitloop-dev")
    } else {
        base_dir.join("habitloop")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
