//! Insertion-index computation and the live drop indicator.

use fasemo_common::{PaneId, Rect, SessionId};
use serde::Serialize;
use tracing::{debug, trace};

use super::DragPayload;
use crate::strip::PaneStrip;

/// Slot a pointer at content x `pointer_x` targets: `i` means "insert
/// before the pane currently at `i`", `pane_count` means "at the end".
///
/// A pointer left of a pane's midpoint targets the slot before it; past
/// the midpoint it targets the slot after.
pub fn calculate_insert_index(strip: &PaneStrip, pointer_x: f64) -> usize {
    let sep = strip.separator_width();
    let mut accumulated = 0.0;
    for (i, pane) in strip.panes().enumerate() {
        if pointer_x < accumulated + pane.width / 2.0 {
            return i;
        }
        accumulated += pane.width + sep;
    }
    strip.pane_count()
}

/// Content x where the indicator sits for insertion slot `index`: the
/// left edge of the pane at `index`, or right of the last separator.
pub fn indicator_x(strip: &PaneStrip, index: usize) -> f64 {
    strip
        .order()
        .get(index)
        .and_then(|id| strip.left_edge(*id))
        .unwrap_or_else(|| strip.strip_width())
}

/// Thin vertical line showing where a dragged pane will land.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InsertionIndicator {
    pub x: f64,
    pub visible: bool,
}

impl InsertionIndicator {
    pub fn rect(&self, width: f64, height: f64) -> Option<Rect> {
        self.visible.then(|| Rect::new(self.x, 0.0, width, height))
    }
}

/// Drives the drag-and-drop reorder gesture against a strip.
///
/// Only the targeted slot is kept between pointer events; the indicator
/// position is derived from the strip each time it is read, so layout
/// changes mid-drag move it along.
#[derive(Debug, Clone)]
pub struct ReorderController {
    session: SessionId,
    target: Option<usize>,
}

impl ReorderController {
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            target: None,
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Insertion slot the live indicator points at, clamped to the
    /// current pane count.
    pub fn target(&self, strip: &PaneStrip) -> Option<usize> {
        self.target.map(|i| i.min(strip.pane_count()))
    }

    pub fn indicator(&self, strip: &PaneStrip) -> InsertionIndicator {
        match self.target(strip) {
            Some(index) => InsertionIndicator {
                x: indicator_x(strip, index),
                visible: true,
            },
            None => InsertionIndicator::default(),
        }
    }

    /// Payload for dragging `id` by its drag handle.
    pub fn payload_for(&self, id: PaneId) -> DragPayload {
        DragPayload::for_pane(&self.session, id)
    }

    /// Track a drag over the strip. Foreign payloads are ignored and leave
    /// the indicator alone. A payload whose pane has been closed hides it.
    /// Returns the targeted insertion index.
    pub fn drag_moved(
        &mut self,
        strip: &PaneStrip,
        payload: &DragPayload,
        pointer_x: f64,
    ) -> Option<usize> {
        let id = match payload.decode(&self.session) {
            Ok(id) => id,
            Err(e) => {
                trace!(error = %e, "drag move ignored");
                return None;
            }
        };
        if !strip.contains(id) {
            trace!(pane_id = %id, "drag move ignored: pane no longer exists");
            self.target = None;
            return None;
        }
        let index = calculate_insert_index(strip, pointer_x);
        self.target = Some(index);
        Some(index)
    }

    /// Complete a drop. Rejected payloads and unknown panes change
    /// nothing, indicator included. Otherwise the pane is moved, the
    /// indicator hidden and `(pane, from, to)` returned.
    pub fn drop(
        &mut self,
        strip: &mut PaneStrip,
        payload: &DragPayload,
        pointer_x: f64,
    ) -> Option<(PaneId, usize, usize)> {
        let id = match payload.decode(&self.session) {
            Ok(id) => id,
            Err(e) => {
                debug!(error = %e, "drop ignored");
                return None;
            }
        };
        if !strip.contains(id) {
            debug!(pane_id = %id, "drop ignored: pane no longer exists");
            return None;
        }
        let target = calculate_insert_index(strip, pointer_x);
        let (from, to) = strip.move_pane(id, target)?;
        self.target = None;
        Some((id, from, to))
    }

    /// Drag left the strip or was cancelled. Hides the indicator only.
    pub fn cancel(&mut self) {
        self.target = None;
    }
}
