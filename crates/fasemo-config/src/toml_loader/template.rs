//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# Fasemo Configuration
# Only override what you want to change -- missing fields use defaults.

[layout]
# min_pane_width = 320.0      # 100-2000
# default_pane_width = 800.0  # >= min_pane_width
# separator_width = 20.0      # 1-100
# indicator_width = 2.0       # 1-20

[startup]
# default_address = "https://www.google.com"
# initial_addresses = ["https://www.google.com"]
# default_scheme = "http"

[toolbar]
# icon_size = 48              # 8-256
# pane_icon_size = 64         # 8-256

[logging]
# level = "info"              # trace, debug, info, warn, error
"#
}
