//! Content lifecycle signals folded into pane and toolbar state.

use fasemo_common::PaneId;
use tracing::{debug, trace};

use crate::content::{ContentEvent, ContentHost};

use super::StripManager;

impl<H: ContentHost> StripManager<H> {
    /// Apply a collaborator event to its pane. Events for panes that were
    /// closed meanwhile are dropped. Returns `true` if the pane's toolbar
    /// icon changed.
    pub fn handle_content_event(&mut self, id: PaneId, event: &ContentEvent) -> bool {
        let Some(pane) = self.strip.pane_mut(id) else {
            debug!(pane_id = %id, ?event, "content event for unknown pane");
            return false;
        };
        if !pane.apply(event) {
            trace!(pane_id = %id, ?event, "load status unchanged");
            return false;
        }
        let status = pane.load_status.clone();
        trace!(pane_id = %id, ?status, "load status changed");
        self.toolbar.update_icon(id, &status)
    }
}
