//! Full configuration validation.
//!
//! Each section has its own check; all errors are collected into a single
//! `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::schema::FasemoConfig;
use fasemo_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FasemoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    misc::validate_startup(&mut errors, config);
    misc::validate_toolbar(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
