//! Derived screen geometry. Recomputed from `order` on every call.

use fasemo_common::{PaneId, Rect};
use serde::Serialize;

use super::PaneStrip;

/// What a content-space x-coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "region", content = "pane")]
pub enum HitRegion {
    Pane(PaneId),
    /// The separator bound to this pane.
    Separator(PaneId),
    /// The trailing filler right of the last separator.
    Filler,
}

impl PaneStrip {
    /// Left edge of a pane: sum of (pane + separator) widths before it.
    pub fn left_edge(&self, id: PaneId) -> Option<f64> {
        let mut x = 0.0;
        for pane in self.panes() {
            if pane.id == id {
                return Some(x);
            }
            x += pane.width + self.metrics.separator_width;
        }
        None
    }

    /// Width of all panes and separators, excluding the filler.
    pub fn strip_width(&self) -> f64 {
        self.panes()
            .map(|p| p.width + self.metrics.separator_width)
            .sum()
    }

    /// The filler is as wide as the viewport so the last pane can always
    /// be scrolled to the left edge and short strips stay left-aligned.
    pub fn filler_width(&self, viewport_width: f64) -> f64 {
        viewport_width.max(0.0)
    }

    pub fn content_width(&self, viewport_width: f64) -> f64 {
        self.strip_width() + self.filler_width(viewport_width)
    }

    /// Pane rects in content space, left to right.
    pub fn compute_layout(&self, height: f64) -> Vec<(PaneId, Rect)> {
        let mut x = 0.0;
        let mut out = Vec::with_capacity(self.order.len());
        for pane in self.panes() {
            out.push((pane.id, Rect::new(x, 0.0, pane.width, height)));
            x += pane.width + self.metrics.separator_width;
        }
        out
    }

    /// Separator rects in content space, keyed by their bound pane.
    pub fn separator_rects(&self, height: f64) -> Vec<(PaneId, Rect)> {
        let sep = self.metrics.separator_width;
        self.compute_layout(height)
            .into_iter()
            .map(|(id, r)| (id, Rect::new(r.right(), 0.0, sep, height)))
            .collect()
    }

    pub fn filler_rect(&self, viewport_width: f64, height: f64) -> Rect {
        Rect::new(
            self.strip_width(),
            0.0,
            self.filler_width(viewport_width),
            height,
        )
    }

    /// Classify a content-space x-coordinate.
    pub fn hit_test(&self, x: f64) -> HitRegion {
        let sep = self.metrics.separator_width;
        let mut left = 0.0;
        for pane in self.panes() {
            let right = left + pane.width;
            if x < left {
                break;
            }
            if x < right {
                return HitRegion::Pane(pane.id);
            }
            if x < right + sep {
                return HitRegion::Separator(pane.id);
            }
            left = right + sep;
        }
        HitRegion::Filler
    }
}
