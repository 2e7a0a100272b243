//! Add, close, move, resize, center and grow on the StripManager.

use fasemo_common::{Event, PaneId};
use tracing::{debug, info};

use crate::content::{normalize_address, ContentHost};

use super::StripManager;

impl<H: ContentHost> StripManager<H> {
    /// Append a pane showing `address` and open its content.
    pub fn add_pane(&mut self, address: impl Into<String>) -> PaneId {
        let address = address.into();
        let id = self.strip.add_pane(address.clone());
        self.host.open(id, &address);
        self.toolbar.resync(self.strip.panes());
        self.events.publish(Event::PaneOpened(id));
        info!(pane_id = %id, %address, "pane opened");
        id
    }

    /// Append a pane at the configured default address.
    pub fn add_default_pane(&mut self) -> PaneId {
        let address = self.default_address.clone();
        self.add_pane(address)
    }

    /// Open one pane per address, in order.
    pub fn open_initial<S: AsRef<str>>(&mut self, addresses: &[S]) -> Vec<PaneId> {
        addresses
            .iter()
            .map(|a| self.add_pane(a.as_ref()))
            .collect()
    }

    /// Close a pane and tear down its content. Unknown ids are ignored.
    pub fn close_pane(&mut self, id: PaneId) -> bool {
        let Some((index, _)) = self.strip.remove_pane(id) else {
            return false;
        };
        self.host.close(id);
        self.toolbar.resync(self.strip.panes());
        self.events.publish(Event::PaneClosed(id));
        self.clamp_scroll();
        info!(pane_id = %id, index, "pane closed");
        true
    }

    /// Move a pane before the pane currently at `index`.
    /// Returns `false` for unknown ids and self-targeting moves.
    pub fn move_pane(&mut self, id: PaneId, index: usize) -> bool {
        match self.strip.move_pane(id, index) {
            Some((from, to)) if from != to => {
                self.after_move(id, from, to);
                true
            }
            _ => false,
        }
    }

    /// Set a pane's width, floored at the minimum.
    pub fn resize_pane(&mut self, id: PaneId, width: f64) -> bool {
        let Some(width) = self.strip.set_width(id, width) else {
            return false;
        };
        self.events.publish(Event::PaneResized { pane: id, width });
        self.clamp_scroll();
        true
    }

    /// Scroll so `id` sits in the middle of the viewport.
    pub fn center(&mut self, id: PaneId) -> bool {
        let before = self.scroll.offset();
        match self.scroll.center(&self.strip, id) {
            Some(offset) => {
                self.publish_scroll(before, offset);
                true
            }
            None => false,
        }
    }

    /// Widen `id` to the viewport and center it.
    pub fn grow(&mut self, id: PaneId) -> bool {
        let before = self.scroll.offset();
        let Some(offset) = self.scroll.grow(&mut self.strip, id) else {
            return false;
        };
        if let Some(width) = self.strip.width_of(id) {
            self.events.publish(Event::PaneResized { pane: id, width });
        }
        self.publish_scroll(before, offset);
        true
    }

    /// Record the visible area supplied by the host.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        let before = self.scroll.offset();
        self.scroll.set_viewport(&self.strip, width, height);
        debug!(width, height, "viewport set");
        self.publish_scroll(before, self.scroll.offset());
    }

    /// Submit address-field text for a pane. Empty input and unknown ids
    /// are ignored; a missing scheme is prefixed.
    pub fn submit_address(&mut self, id: PaneId, input: &str) -> bool {
        let Some(address) = normalize_address(input, &self.default_scheme) else {
            debug!(pane_id = %id, "empty address ignored");
            return false;
        };
        let Some(pane) = self.strip.pane_mut(id) else {
            debug!(pane_id = %id, "address submit ignored: unknown pane");
            return false;
        };
        pane.address.clone_from(&address);
        self.host.navigate(id, &address);
        debug!(pane_id = %id, %address, "navigating");
        true
    }

    pub(super) fn after_move(&mut self, id: PaneId, from: usize, to: usize) {
        self.toolbar.resync(self.strip.panes());
        self.events.publish(Event::PaneMoved { pane: id, from, to });
    }

    pub(super) fn clamp_scroll(&mut self) {
        let before = self.scroll.offset();
        let after = self.scroll.clamp(&self.strip);
        self.publish_scroll(before, after);
    }

    fn publish_scroll(&self, before: f64, after: f64) {
        if before != after {
            self.events.publish(Event::ScrollChanged { offset: after });
        }
    }
}
