use std::path::Path;

use crate::config;
use crate::error::{Result, StardateError};

/// Persist a new base year to the config file
pub fn set(config_path: Option<&Path>, year: i32) -> Result<()> {
    let config_path = config_path.ok_or_else(|| {
        StardateError::Config(
            "Cannot locate home directory; pass --config to choose a file".to_string(),
        )
    })?;

    config::save(config_path, year)?;

    println!("Reference base year updated to {}", year);
    Ok(())
}
