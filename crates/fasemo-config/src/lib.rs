//! Fasemo configuration.
//!
//! TOML-based configuration for the pane strip, the toolbar and logging.
//! Every section uses serde defaults so partial files work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FasemoConfig, LayoutConfig, LogLevel, LoggingConfig, StartupConfig, ToolbarConfig};

use fasemo_common::ConfigError;
use std::path::Path;

/// Load and validate the config.
///
/// With `path` set, the file must exist and parse. Without it the
/// platform default location is used and created on first run.
pub fn load_config(path: Option<&Path>) -> Result<FasemoConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FasemoConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
