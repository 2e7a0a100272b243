//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod startup;
mod system;

pub use layout::*;
pub use startup::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FasemoConfig {
    pub layout: LayoutConfig,
    pub startup: StartupConfig,
    pub toolbar: ToolbarConfig,
    pub logging: LoggingConfig,
}
