//! Horizontal scroll offset: centering a pane and growing it to fill the
//! viewport. Offsets are applied immediately, without animation.

use fasemo_common::PaneId;
use tracing::{debug, trace};

use crate::strip::PaneStrip;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollCoordinator {
    offset: f64,
    viewport_width: f64,
    viewport_height: f64,
}

impl ScrollCoordinator {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_width: viewport_width.max(0.0),
            viewport_height: viewport_height.max(0.0),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Convert a viewport-relative x into content space.
    pub fn to_content_x(&self, viewport_x: f64) -> f64 {
        viewport_x + self.offset
    }

    /// Largest valid offset: content width minus the viewport.
    pub fn max_offset(&self, strip: &PaneStrip) -> f64 {
        (strip.content_width(self.viewport_width) - self.viewport_width).max(0.0)
    }

    /// Record a new viewport size and re-clamp the offset.
    pub fn set_viewport(&mut self, strip: &PaneStrip, width: f64, height: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.clamp(strip);
    }

    /// Set the offset directly, clamped to `[0, max_offset]`.
    pub fn scroll_to(&mut self, strip: &PaneStrip, offset: f64) -> f64 {
        self.offset = offset.clamp(0.0, self.max_offset(strip));
        self.offset
    }

    /// Pull the offset back into range after the content shrank.
    pub fn clamp(&mut self, strip: &PaneStrip) -> f64 {
        let before = self.offset;
        let after = self.scroll_to(strip, before);
        if after != before {
            trace!(before, after, "scroll offset clamped");
        }
        after
    }

    /// Scroll so the pane's center lines up with the viewport's center.
    /// Returns the applied offset, or `None` if `id` is unknown.
    pub fn center(&mut self, strip: &PaneStrip, id: PaneId) -> Option<f64> {
        let x = strip.left_edge(id)?;
        let width = strip.width_of(id)?;
        let desired = x + width / 2.0 - self.viewport_width / 2.0;
        let applied = self.scroll_to(strip, desired);
        debug!(pane_id = %id, desired, applied, "centered pane");
        Some(applied)
    }

    /// Widen the pane to the viewport width, then center it.
    pub fn grow(&mut self, strip: &mut PaneStrip, id: PaneId) -> Option<f64> {
        let width = strip.set_width(id, self.viewport_width)?;
        debug!(pane_id = %id, width, "grew pane to viewport");
        self.center(strip, id)
    }
}
