//! Headless content host that logs navigation requests.

use fasemo_common::PaneId;
use fasemo_tiling::ContentHost;
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingContentHost {
    requests: usize,
}

impl LoggingContentHost {
    /// Navigation requests seen so far (open, navigate and close).
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl ContentHost for LoggingContentHost {
    fn open(&mut self, pane: PaneId, address: &str) {
        self.requests += 1;
        info!(pane_id = %pane, address, "open content");
    }

    fn navigate(&mut self, pane: PaneId, address: &str) {
        self.requests += 1;
        info!(pane_id = %pane, address, "navigate");
    }

    fn close(&mut self, pane: PaneId) {
        self.requests += 1;
        info!(pane_id = %pane, "close content");
    }
}
