//! Separator drag handling on the PaneStrip.

use fasemo_common::PaneId;
use tracing::{debug, trace};

use super::PaneStrip;

impl PaneStrip {
    /// Press the separator bound to `id` at content x `pointer_x`.
    /// Any other in-flight resize is released first.
    pub fn begin_resize(&mut self, id: PaneId, pointer_x: f64) -> bool {
        let Some(index) = self.index_of(id) else {
            trace!(pane_id = %id, "resize press ignored: unknown pane");
            return false;
        };
        self.end_resize();
        let width = self.panes[&id].width;
        self.separators[index].press(pointer_x, width);
        debug!(pane_id = %id, pointer_x, width, "resize started");
        true
    }

    /// The pane whose separator is being dragged, if any.
    pub fn resizing_pane(&self) -> Option<PaneId> {
        self.separators
            .iter()
            .find(|s| s.is_dragging())
            .map(|s| s.pane_id())
    }

    /// Apply a pointer move to the dragging separator. Returns the pane
    /// and its new width, or `None` when no resize is active.
    pub fn resize_to(&mut self, pointer_x: f64) -> Option<(PaneId, f64)> {
        let floor = self.metrics.min_pane_width;
        let (id, width) = self
            .separators
            .iter()
            .find_map(|s| s.width_at(pointer_x, floor).map(|w| (s.pane_id(), w)))?;
        let applied = self.set_width(id, width)?;
        Some((id, applied))
    }

    /// Release whichever separator is dragging. Returns its pane.
    pub fn end_resize(&mut self) -> Option<PaneId> {
        let sep = self.separators.iter_mut().find(|s| s.is_dragging())?;
        sep.release();
        debug!(pane_id = %sep.pane_id(), "resize ended");
        Some(sep.pane_id())
    }
}
