//! The StripManager coordinates the strip, drag-reorder, resize, scroll
//! and toolbar, and forwards navigation to the content host.

mod content_events;
mod dispatch;
mod operations;
mod pointer;
mod snapshot;
mod types;

pub use snapshot::{LayoutSnapshot, PaneSnapshot, SeparatorSnapshot};
pub use types::*;
