//! Serialisable view of the whole layout.

use fasemo_common::{PaneId, Rect};
use serde::Serialize;

use crate::content::ContentHost;
use crate::pane::LoadStatus;
use crate::toolbar::ToolbarSlot;

use super::StripManager;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaneSnapshot {
    pub id: PaneId,
    pub index: usize,
    /// Content-space rect.
    pub rect: Rect,
    pub address: String,
    pub load_status: LoadStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparatorSnapshot {
    pub pane: PaneId,
    pub rect: Rect,
    pub dragging: bool,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scroll_offset: f64,
    pub max_scroll: f64,
    pub strip_width: f64,
    pub content_width: f64,
    pub panes: Vec<PaneSnapshot>,
    pub separators: Vec<SeparatorSnapshot>,
    pub filler: Rect,
    /// Present only while a drag hovers the strip.
    pub indicator: Option<Rect>,
    pub toolbar: Vec<ToolbarSlot>,
}

impl LayoutSnapshot {
    pub fn order(&self) -> Vec<PaneId> {
        self.panes.iter().map(|p| p.id).collect()
    }
}

impl<H: ContentHost> StripManager<H> {
    pub fn snapshot(&self) -> LayoutSnapshot {
        let vw = self.scroll.viewport_width();
        let vh = self.scroll.viewport_height();

        let panes = self
            .strip
            .compute_layout(vh)
            .into_iter()
            .enumerate()
            .filter_map(|(index, (id, rect))| {
                let pane = self.strip.pane(id)?;
                Some(PaneSnapshot {
                    id,
                    index,
                    rect,
                    address: pane.address.clone(),
                    load_status: pane.load_status.clone(),
                })
            })
            .collect();

        let separators = self
            .strip
            .separator_rects(vh)
            .into_iter()
            .map(|(pane, rect)| SeparatorSnapshot {
                pane,
                rect,
                dragging: self.strip.separator(pane).is_some_and(|s| s.is_dragging()),
            })
            .collect();

        LayoutSnapshot {
            viewport_width: vw,
            viewport_height: vh,
            scroll_offset: self.scroll.offset(),
            max_scroll: self.scroll.max_offset(&self.strip),
            strip_width: self.strip.strip_width(),
            content_width: self.strip.content_width(vw),
            panes,
            separators,
            filler: self.strip.filler_rect(vw, vh),
            indicator: self.reorder.indicator(&self.strip).rect(self.indicator_width, vh),
            toolbar: self.toolbar.slots(),
        }
    }
}
