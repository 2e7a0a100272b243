//! No-op content host, used headless and in tests.

use fasemo_common::PaneId;
use tracing::trace;

use super::ContentHost;

/// A content host that renders nothing. Requests are only traced.
#[derive(Debug, Default)]
pub struct NoopContentHost;

impl ContentHost for NoopContentHost {
    fn open(&mut self, pane: PaneId, address: &str) {
        trace!(pane_id = %pane, address, "open (noop)");
    }

    fn navigate(&mut self, pane: PaneId, address: &str) {
        trace!(pane_id = %pane, address, "navigate (noop)");
    }

    fn close(&mut self, pane: PaneId) {
        trace!(pane_id = %pane, "close (noop)");
    }
}
