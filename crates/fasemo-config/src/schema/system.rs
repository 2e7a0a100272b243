//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level scoped to the fasemo crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "fasemo=trace",
            LogLevel::Debug => "fasemo=debug",
            LogLevel::Info => "fasemo=info",
            LogLevel::Warn => "fasemo=warn",
            LogLevel::Error => "fasemo=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
