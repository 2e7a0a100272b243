//! Contract with the embedded content renderer.
//!
//! The strip never inspects content. It commands navigation through a
//! [`ContentHost`] and consumes the four lifecycle signals in
//! [`ContentEvent`].

mod address;
mod noop;

pub use address::{has_scheme, normalize_address};
pub use noop::NoopContentHost;

use fasemo_common::PaneId;
use serde::{Deserialize, Serialize};

use crate::pane::Icon;

/// Lifecycle signals emitted by a pane's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContentEvent {
    /// Navigation has started.
    LoadStarted,
    /// The page icon changed; `None` means the page has no icon.
    IconChanged(Option<Icon>),
    /// The page finished loading, successfully or not.
    LoadFinished { success: bool },
    /// The content navigated to a new address.
    AddressChanged(String),
}

/// Receiver of navigation commands, one content instance per pane.
pub trait ContentHost {
    /// Create content for a newly added pane.
    fn open(&mut self, pane: PaneId, address: &str);
    /// Load `address` in an existing pane.
    fn navigate(&mut self, pane: PaneId, address: &str);
    /// Tear down a closed pane's content.
    fn close(&mut self, pane: PaneId);
}
