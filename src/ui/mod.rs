//! Immediate-mode UI helpers for the host window

mod input;
mod widgets;

pub use input::*;
pub use widgets::*;

/// Axis-aligned rectangle in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Inclusive of the left/top edge, exclusive of the right/bottom edge
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping area, `None` if the rects don't overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect() {
        let canvas = Rect::new(0.0, 40.0, 800.0, 800.0);
        let bar = Rect::new(100.0, 38.0, 60.0, 4.0);
        assert_eq!(bar.intersect(&canvas), Some(Rect::new(100.0, 40.0, 60.0, 2.0)));

        let above = Rect::new(100.0, 0.0, 60.0, 4.0);
        assert_eq!(above.intersect(&canvas), None);
    }
}
