use fasemo_common::PaneId;
use serde::{Deserialize, Serialize};

/// Discrete layout commands issued by user-facing controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum StripCommand {
    /// Append a pane; `None` opens the configured default address.
    AddPane { address: Option<String> },
    Close { pane: PaneId },
    Move { pane: PaneId, index: usize },
    Resize { pane: PaneId, width: f64 },
    Center { pane: PaneId },
    Grow { pane: PaneId },
    /// Address-field submit; the input is normalised before navigation.
    Navigate { pane: PaneId, input: String },
    ActivateToolbar { slot: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_deserialize_from_json() {
        let cmd: StripCommand =
            serde_json::from_str(r#"{"command":"move","pane":3,"index":0}"#).unwrap();
        assert_eq!(
            cmd,
            StripCommand::Move {
                pane: PaneId(3),
                index: 0
            }
        );

        let cmd: StripCommand = serde_json::from_str(r#"{"command":"add_pane"}"#).unwrap();
        assert_eq!(cmd, StripCommand::AddPane { address: None });
    }
}
