//! Resize handle bound to the right edge of one pane.
//!
//! State machine: `Idle -> Dragging -> Idle`. The drag start is captured
//! on press and every move assigns the new width directly.

use fasemo_common::PaneId;

/// Gesture state captured when the handle is pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDrag {
    /// Pointer x when the press happened.
    pub start_x: f64,
    /// Bound pane's width when the press happened.
    pub start_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Separator {
    pane_id: PaneId,
    drag: Option<ResizeDrag>,
}

impl Separator {
    pub fn new(pane_id: PaneId) -> Self {
        Self {
            pane_id,
            drag: None,
        }
    }

    /// The pane immediately to the left of this handle.
    pub fn pane_id(&self) -> PaneId {
        self.pane_id
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<ResizeDrag> {
        self.drag
    }

    /// Enter `Dragging`. A second press restarts the gesture.
    pub fn press(&mut self, pointer_x: f64, current_width: f64) {
        self.drag = Some(ResizeDrag {
            start_x: pointer_x,
            start_width: current_width,
        });
    }

    /// Width the bound pane should take for a pointer at `pointer_x`,
    /// floored at `min_width`. `None` while idle.
    pub fn width_at(&self, pointer_x: f64, min_width: f64) -> Option<f64> {
        self.drag
            .map(|d| (d.start_width + (pointer_x - d.start_x)).max(min_width))
    }

    /// Back to `Idle`. Returns whether a gesture was active.
    pub fn release(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_separator_is_idle() {
        let sep = Separator::new(PaneId(1));
        assert!(!sep.is_dragging());
        assert_eq!(sep.width_at(100.0, 320.0), None);
    }

    #[test]
    fn drag_right_widens() {
        let mut sep = Separator::new(PaneId(1));
        sep.press(500.0, 400.0);
        assert!(sep.is_dragging());
        let w = sep.width_at(580.0, 320.0).unwrap();
        assert!((w - 480.0).abs() < 0.01);
    }

    #[test]
    fn drag_left_shrinks_to_floor() {
        let mut sep = Separator::new(PaneId(1));
        sep.press(500.0, 400.0);
        let w = sep.width_at(450.0, 320.0).unwrap();
        assert!((w - 350.0).abs() < 0.01);
        let w = sep.width_at(0.0, 320.0).unwrap();
        assert!((w - 320.0).abs() < 0.01);
    }

    #[test]
    fn width_is_relative_to_press_not_previous_move() {
        let mut sep = Separator::new(PaneId(1));
        sep.press(100.0, 400.0);
        sep.width_at(150.0, 320.0);
        let w = sep.width_at(120.0, 320.0).unwrap();
        assert!((w - 420.0).abs() < 0.01);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut sep = Separator::new(PaneId(1));
        sep.press(10.0, 400.0);
        assert!(sep.release());
        assert!(!sep.is_dragging());
        assert!(sep.drag().is_none());
        assert!(!sep.release());
    }
}
