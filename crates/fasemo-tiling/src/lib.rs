//! Horizontal pane strip: layout model, drag-reorder, separator resize,
//! scroll centering and the toolbar mirror.

pub mod commands;
pub mod content;
pub mod manager;
pub mod pane;
pub mod reorder;
pub mod scroll;
pub mod separator;
pub mod strip;
pub mod toolbar;

pub use commands::StripCommand;
pub use content::{ContentEvent, ContentHost, NoopContentHost};
pub use manager::{LayoutSnapshot, PaneSnapshot, SeparatorSnapshot, StripManager};
pub use pane::{Icon, LoadStatus, Pane};
pub use reorder::{DragPayload, InsertionIndicator, ReorderController};
pub use scroll::ScrollCoordinator;
pub use separator::Separator;
pub use strip::{HitRegion, PaneStrip, StripMetrics};
pub use toolbar::{ToolbarAction, ToolbarEntry, ToolbarIcon, ToolbarMirror, ToolbarSlot};
