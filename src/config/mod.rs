//! Configuration module
//!
//! Persists the reference base year as a single plain-text integer.
//! Reads never fail: anything unusable falls back to [`DEFAULT_BASE_YEAR`].

use crate::error::{Result, StardateError};
use std::fs;
use std::path::{Path, PathBuf};

/// Base year used when nothing has been persisted
pub const DEFAULT_BASE_YEAR: i32 = 2323;

/// Config file name inside the user's home directory
pub const CONFIG_FILE_NAME: &str = ".stardate-cli-config";

/// Default config location: `$HOME/.stardate-cli-config`
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Load the persisted base year, falling back to the default on any failure
pub fn load(path: &Path) -> i32 {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(
                "cannot read base year from '{}' ({}), using {}",
                path.display(),
                e,
                DEFAULT_BASE_YEAR
            );
            return DEFAULT_BASE_YEAR;
        }
    };

    match content.trim().parse() {
        Ok(year) => {
            tracing::debug!("loaded base year {} from '{}'", year, path.display());
            year
        }
        Err(e) => {
            tracing::debug!(
                "invalid base year in '{}' ({}), using {}",
                path.display(),
                e,
                DEFAULT_BASE_YEAR
            );
            DEFAULT_BASE_YEAR
        }
    }
}

/// Load from `path` if there is one, otherwise return the default
pub fn load_or_default(path: Option<&Path>) -> i32 {
    match path {
        Some(path) => load(path),
        None => {
            tracing::debug!("no config path available, using {}", DEFAULT_BASE_YEAR);
            DEFAULT_BASE_YEAR
        }
    }
}

/// Overwrite the config file with a new base year
pub fn save(path: &Path, year: i32) -> Result<()> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_error(path, e))?;
        }
    }

    fs::write(path, year.to_string()).map_err(|e| write_error(path, e))?;
    tracing::info!("persisted base year {} to '{}'", year, path.display());
    Ok(())
}

fn write_error(path: &Path, e: std::io::Error) -> StardateError {
    StardateError::Config(format!(
        "Cannot write base year to '{}': {}",
        path.display(),
        e
    ))
}
