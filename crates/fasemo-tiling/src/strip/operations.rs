//! Insert, remove, reorder and width operations on the PaneStrip.

use fasemo_common::PaneId;
use tracing::{debug, trace};

use crate::pane::Pane;
use crate::separator::Separator;

use super::PaneStrip;

impl PaneStrip {
    /// Append a new pane and its separator at the right end.
    pub fn add_pane(&mut self, address: impl Into<String>) -> PaneId {
        let id = PaneId(self.next_id);
        self.next_id += 1;

        let pane = Pane::new(id, address, self.metrics.default_pane_width);
        self.panes.insert(id, pane);
        self.order.push(id);
        self.separators.push(Separator::new(id));

        debug!(pane_id = %id, index = self.order.len() - 1, "pane added");
        id
    }

    /// Remove a pane together with its separator. Later panes shift left
    /// by one. Returns the index it occupied and the pane itself, or
    /// `None` if `id` is unknown.
    pub fn remove_pane(&mut self, id: PaneId) -> Option<(usize, Pane)> {
        let Some(index) = self.index_of(id) else {
            trace!(pane_id = %id, "remove ignored: unknown pane");
            return None;
        };
        self.order.remove(index);
        self.separators.remove(index);
        let pane = self.panes.remove(&id)?;

        debug!(pane_id = %id, index, "pane removed");
        Some((index, pane))
    }

    /// Move a pane so it sits before the pane currently at `target`.
    ///
    /// `target` is in pre-removal index space (`0..=pane_count`); when the
    /// pane's own index is below it, the target is decremented after the
    /// pane is taken out. Returns `(from, to)` final indices, or `None` if
    /// `id` is unknown.
    pub fn move_pane(&mut self, id: PaneId, target: usize) -> Option<(usize, usize)> {
        let Some(from) = self.index_of(id) else {
            trace!(pane_id = %id, "move ignored: unknown pane");
            return None;
        };

        let mut to = target.min(self.order.len());
        if from < to {
            to -= 1;
        }
        if from == to {
            return Some((from, to));
        }

        let pane_id = self.order.remove(from);
        let separator = self.separators.remove(from);
        self.order.insert(to, pane_id);
        self.separators.insert(to, separator);

        debug!(pane_id = %id, from, to, "pane moved");
        Some((from, to))
    }

    /// Assign a width, floored at the minimum pane width. Returns the
    /// width actually applied, or `None` if `id` is unknown.
    pub fn set_width(&mut self, id: PaneId, width: f64) -> Option<f64> {
        let floor = self.metrics.min_pane_width;
        let pane = self.panes.get_mut(&id)?;
        let width = if width.is_nan() { floor } else { width.max(floor) };
        pane.width = width;
        trace!(pane_id = %id, width, "pane width set");
        Some(width)
    }
}
