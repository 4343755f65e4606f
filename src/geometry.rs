//! Window placement and drag math, kept free of egui plumbing so it can be
//! exercised directly.

use eframe::egui::{pos2, vec2, Pos2, Vec2};

/// Logical size of the overlay window.
pub const WINDOW_SIZE: Vec2 = vec2(300.0, 100.0);

/// Gap between the right window edge and the right screen edge.
pub const RIGHT_MARGIN: f32 = 20.0;

/// Distance from the window origin to the bottom screen edge. Intentionally
/// not symmetric with the right margin.
pub const BOTTOM_MARGIN: f32 = 150.0;

/// Origin for the initial bottom-right placement on a monitor of the given
/// size.
pub fn initial_origin(monitor: Vec2) -> Pos2 {
    pos2(
        monitor.x - WINDOW_SIZE.x - RIGHT_MARGIN,
        monitor.y - BOTTOM_MARGIN,
    )
}

/// Drag-to-reposition state: `Idle` when no anchor is held, `Dragging` while
/// one is. The anchor is the pointer's offset within the window at press
/// time; each motion event retargets the window origin to
/// `pointer_screen - anchor`, giving 1:1 tracking with no clamping.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragState {
    anchor: Option<Vec2>,
}

impl DragState {
    /// Press: capture the pointer's window-local offset.
    pub fn begin(&mut self, pointer_in_window: Vec2) {
        self.anchor = Some(pointer_in_window);
    }

    /// Motion: the new window origin for the current pointer screen
    /// position, or `None` when idle.
    pub fn target(&self, pointer_screen: Pos2) -> Option<Pos2> {
        self.anchor.map(|anchor| pointer_screen - anchor)
    }

    /// Release: back to idle.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initial_origin_is_bottom_right_with_fixed_margins() {
        assert_eq!(initial_origin(vec2(1920.0, 1080.0)), pos2(1600.0, 930.0));
    }

    #[test]
    fn drag_retargets_origin_by_pointer_minus_anchor() {
        let mut drag = DragState::default();

        // Press at screen (100, 100) over a window whose origin is (50, 50):
        // the pointer sits at (50, 50) within the window.
        drag.begin(vec2(50.0, 50.0));
        assert_eq!(drag.target(pos2(140.0, 130.0)), Some(pos2(90.0, 80.0)));

        // Tracking is 1:1; a second motion event reuses the same anchor.
        assert_eq!(drag.target(pos2(40.0, 60.0)), Some(pos2(-10.0, 10.0)));
    }

    #[test]
    fn motion_without_a_press_is_ignored() {
        let drag = DragState::default();
        assert_eq!(drag.target(pos2(140.0, 130.0)), None);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut drag = DragState::default();
        drag.begin(vec2(10.0, 10.0));
        assert!(drag.is_dragging());
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.target(pos2(0.0, 0.0)), None);
    }
}
