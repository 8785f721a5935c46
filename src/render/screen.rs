//! On-screen presenter (macroquad)

use macroquad::prelude::*;
use crate::ui::Rect;
use super::commands::DrawCommand;

/// Draw a display list into `canvas` (window coordinates).
/// Rects are clipped to the canvas so dragged-off notes don't spill over the toolbar.
pub fn present(list: &[DrawCommand], canvas: Rect) {
    for cmd in list {
        match cmd {
            DrawCommand::Clear(color) => {
                draw_rectangle(canvas.x, canvas.y, canvas.w, canvas.h, color.to_macroquad());
            }
            DrawCommand::FillRect { x, y, w, h, color } => {
                let r = Rect::new(canvas.x + x, canvas.y + y, *w, *h);
                if let Some(r) = r.intersect(&canvas) {
                    draw_rectangle(r.x, r.y, r.w, r.h, color.to_macroquad());
                }
            }
            DrawCommand::FillText { text, x, y, size, color } => {
                draw_text(text, canvas.x + x, canvas.y + y, *size, color.to_macroquad());
            }
        }
    }
}
