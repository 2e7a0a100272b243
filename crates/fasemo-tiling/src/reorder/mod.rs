//! Drag-and-drop pane reordering.

mod controller;
mod payload;

pub use controller::{calculate_insert_index, indicator_x, InsertionIndicator, ReorderController};
pub use payload::{DragPayload, PANE_DRAG_MIME};
