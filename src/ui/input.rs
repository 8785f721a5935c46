//! Input state for UI interaction

use super::Rect;
use crate::drag::PointerEvent;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// Derives canvas pointer events from per-frame mouse polling.
/// Events are only reported while the cursor is over the canvas, plus one
/// `Leave` when it exits.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<(f32, f32)>,
    was_inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for this frame, in the order a browser would deliver them
    pub fn update(&mut self, mouse: &MouseState, canvas: &Rect) -> Vec<PointerEvent> {
        let (x, y) = (mouse.x, mouse.y);
        let inside = mouse.inside(canvas);
        let moved = self.last != Some((x, y));
        let mut events = Vec::new();

        if inside {
            if moved && !mouse.left_pressed {
                events.push(PointerEvent::Move { x, y });
            }
            if mouse.left_pressed {
                events.push(PointerEvent::Down { x, y });
            }
            if mouse.left_released {
                events.push(PointerEvent::Up);
            }
        } else if self.was_inside {
            events.push(PointerEvent::Leave);
        }

        self.last = Some((x, y));
        self.was_inside = inside;
        events
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// Whether the pattern text field has keyboard focus
    pub text_focus: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            text_focus: true,
        }
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Rect = Rect::new(0.0, 40.0, 800.0, 800.0);

    fn mouse(x: f32, y: f32) -> MouseState {
        MouseState { x, y, ..Default::default() }
    }

    #[test]
    fn test_press_move_release() {
        let mut tracker = PointerTracker::new();
        let press = MouseState { left_down: true, left_pressed: true, ..mouse(200.0, 100.0) };
        assert_eq!(tracker.update(&press, &CANVAS), vec![PointerEvent::Down { x: 200.0, y: 100.0 }]);

        let held = MouseState { left_down: true, ..mouse(200.0, 130.0) };
        assert_eq!(tracker.update(&held, &CANVAS), vec![PointerEvent::Move { x: 200.0, y: 130.0 }]);

        // Still: no move event
        assert!(tracker.update(&held, &CANVAS).is_empty());

        let release = MouseState { left_released: true, ..mouse(200.0, 130.0) };
        assert_eq!(tracker.update(&release, &CANVAS), vec![PointerEvent::Up]);
    }

    #[test]
    fn test_leave_reported_once() {
        let mut tracker = PointerTracker::new();
        tracker.update(&mouse(10.0, 50.0), &CANVAS);
        assert_eq!(tracker.update(&mouse(10.0, 10.0), &CANVAS), vec![PointerEvent::Leave]);
        assert!(tracker.update(&mouse(20.0, 10.0), &CANVAS).is_empty());
    }

    #[test]
    fn test_release_outside_canvas_is_not_up() {
        let mut tracker = PointerTracker::new();
        tracker.update(&mouse(10.0, 50.0), &CANVAS);
        let release = MouseState { left_released: true, ..mouse(10.0, 900.0) };
        assert_eq!(tracker.update(&release, &CANVAS), vec![PointerEvent::Leave]);
    }
}
