//! Strip geometry configuration.

use serde::{Deserialize, Serialize};

/// Pane strip geometry, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Floor applied to every pane width (valid range: 100-2000).
    pub min_pane_width: f64,
    /// Width given to newly added panes (must be >= `min_pane_width`).
    pub default_pane_width: f64,
    /// Fixed width of the resize handle right of each pane (valid range: 1-100).
    pub separator_width: f64,
    /// Width of the drop insertion line (valid range: 1-20).
    pub indicator_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_pane_width: 320.0,
            default_pane_width: 800.0,
            separator_width: 20.0,
            indicator_width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert!((config.min_pane_width - 320.0).abs() < f64::EPSILON);
        assert!((config.default_pane_width - 800.0).abs() < f64::EPSILON);
        assert!((config.separator_width - 20.0).abs() < f64::EPSILON);
        assert!((config.indicator_width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn layout_config_partial_toml() {
        let config: LayoutConfig = toml::from_str("separator_width = 12.0\n").unwrap();
        assert!((config.separator_width - 12.0).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.min_pane_width - 320.0).abs() < f64::EPSILON);
    }
}
