//! Startup and toolbar configuration types.

use serde::{Deserialize, Serialize};

/// What the strip opens with and what the add control opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Address used by the pinned add control.
    pub default_address: String,
    /// Panes opened at boot, left to right.
    pub initial_addresses: Vec<String>,
    /// Scheme prefixed to typed addresses that lack one.
    pub default_scheme: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            default_address: "https://www.google.com".into(),
            initial_addresses: vec!["https://www.google.com".into()],
            default_scheme: "http".into(),
        }
    }
}

/// Shortcut toolbar icon sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Size of the add control icon (valid range: 8-256).
    pub icon_size: u32,
    /// Size of pane favicons once loaded (valid range: 8-256).
    pub pane_icon_size: u32,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            icon_size: 48,
            pane_icon_size: 64,
        }
    }
}
