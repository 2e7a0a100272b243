//! Command dispatch and toolbar activation.

use tracing::debug;

use crate::commands::StripCommand;
use crate::content::ContentHost;
use crate::toolbar::ToolbarAction;

use super::StripManager;

impl<H: ContentHost> StripManager<H> {
    /// Execute a command. Returns `true` if it had an effect.
    pub fn execute(&mut self, cmd: StripCommand) -> bool {
        match cmd {
            StripCommand::AddPane { address: Some(address) } => {
                self.add_pane(address);
                true
            }
            StripCommand::AddPane { address: None } => {
                self.add_default_pane();
                true
            }
            StripCommand::Close { pane } => self.close_pane(pane),
            StripCommand::Move { pane, index } => self.move_pane(pane, index),
            StripCommand::Resize { pane, width } => self.resize_pane(pane, width),
            StripCommand::Center { pane } => self.center(pane),
            StripCommand::Grow { pane } => self.grow(pane),
            StripCommand::Navigate { pane, input } => self.submit_address(pane, &input),
            StripCommand::ActivateToolbar { slot } => self.activate_toolbar(slot),
        }
    }

    /// Click a toolbar slot: slot 0 adds a pane, the rest center theirs.
    pub fn activate_toolbar(&mut self, slot: usize) -> bool {
        match self.toolbar.action_at(slot) {
            Some(ToolbarAction::AddPane) => {
                self.add_default_pane();
                true
            }
            Some(ToolbarAction::Center(id)) => self.center(id),
            None => {
                debug!(slot, "toolbar slot out of range");
                false
            }
        }
    }
}
