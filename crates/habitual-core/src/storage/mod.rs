//! On-disk collaborators of the scoring engine: configuration, habit
//! definitions and the entry log.

mod config;
pub mod entries;
pub mod habits;

pub use config::{Config, DisplayConfig, FilesConfig};
pub use entries::{Entry, EntryLog};
pub use habits::HabitSet;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/habitual[-dev]/` based on HABITUAL_ENV.
///
/// Set HABITUAL_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITUAL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitual-dev")
    } else {
        base_dir.join("habitual")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
