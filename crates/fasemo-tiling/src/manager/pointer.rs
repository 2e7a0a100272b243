//! Pointer and drag-and-drop input. All x-coordinates here are viewport
//! relative and converted to content space with the current offset.

use fasemo_common::{Event, PaneId};
use tracing::debug;

use crate::content::ContentHost;
use crate::reorder::DragPayload;
use crate::strip::HitRegion;

use super::StripManager;

impl<H: ContentHost> StripManager<H> {
    /// Classify a viewport x against the current layout.
    pub fn hit_test(&self, viewport_x: f64) -> HitRegion {
        self.strip.hit_test(self.scroll.to_content_x(viewport_x))
    }

    /// Route a pointer press: a press on a separator starts resizing it.
    pub fn pointer_pressed(&mut self, viewport_x: f64) -> HitRegion {
        let region = self.hit_test(viewport_x);
        if let HitRegion::Separator(id) = region {
            self.press_separator(id, viewport_x);
        }
        region
    }

    /// Start resizing the pane bound to this separator.
    pub fn press_separator(&mut self, id: PaneId, viewport_x: f64) -> bool {
        let x = self.scroll.to_content_x(viewport_x);
        self.strip.begin_resize(id, x)
    }

    /// Pointer moved during a press. Returns `true` if a pane was resized.
    pub fn pointer_moved(&mut self, viewport_x: f64) -> bool {
        let x = self.scroll.to_content_x(viewport_x);
        match self.strip.resize_to(x) {
            Some((pane, width)) => {
                self.events.publish(Event::PaneResized { pane, width });
                true
            }
            None => false,
        }
    }

    /// Finish a resize, applying the final pointer position first.
    pub fn pointer_released(&mut self, viewport_x: f64) -> bool {
        if self.strip.resizing_pane().is_none() {
            return false;
        }
        self.pointer_moved(viewport_x);
        self.strip.end_resize();
        self.clamp_scroll();
        true
    }

    /// Payload for dragging a pane by its drag handle.
    pub fn begin_drag(&self, id: PaneId) -> Option<DragPayload> {
        if !self.strip.contains(id) {
            debug!(pane_id = %id, "drag ignored: unknown pane");
            return None;
        }
        Some(self.reorder.payload_for(id))
    }

    /// Drag moved over the strip. Returns the targeted insertion index,
    /// or `None` for payloads this strip does not accept.
    pub fn drag_moved(&mut self, payload: &DragPayload, viewport_x: f64) -> Option<usize> {
        let x = self.scroll.to_content_x(viewport_x);
        self.reorder.drag_moved(&self.strip, payload, x)
    }

    /// Drop a payload. Returns `true` when the order changed.
    pub fn drop(&mut self, payload: &DragPayload, viewport_x: f64) -> bool {
        let x = self.scroll.to_content_x(viewport_x);
        match self.reorder.drop(&mut self.strip, payload, x) {
            Some((id, from, to)) if from != to => {
                self.after_move(id, from, to);
                true
            }
            Some((id, index, _)) => {
                debug!(pane_id = %id, index, "dropped onto own slot");
                false
            }
            None => false,
        }
    }

    /// Drag left the strip or was cancelled.
    pub fn drag_left(&mut self) {
        self.reorder.cancel();
    }
}
