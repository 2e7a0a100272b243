//! Core TOML config loading: read from path or platform default.

use crate::schema::FasemoConfig;
use fasemo_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Values are not range-checked
/// here; [`crate::load_config`] validates once after loading.
pub fn load_from_path(path: &Path) -> Result<FasemoConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: FasemoConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/fasemo/config.toml`
/// On macOS: `~/Library/Application Support/fasemo/config.toml`
///
/// If the file does not exist, a commented default is written and
/// defaults are returned.
pub fn load_default() -> Result<FasemoConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(FasemoConfig::default())
        }
        Err(e) => Err(e),
    }
}
