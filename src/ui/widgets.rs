//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, UiContext};

/// Accent color for focus and hover
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

const FIELD_BG: Color = Color::new(0.16, 0.16, 0.19, 1.0);
const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const MUTED_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);

/// Draw a text button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, text: &str, bg_color: Color) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    let color = if hovered && ctx.mouse.left_down {
        Color::new(bg_color.r * 0.8, bg_color.g * 0.8, bg_color.b * 0.8, bg_color.a)
    } else if hovered {
        Color::new(bg_color.r * 1.2, bg_color.g * 1.2, bg_color.b * 1.2, bg_color.a)
    } else {
        bg_color
    };

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);

    let dims = measure_text(text, None, 14, 1.0);
    let tx = rect.x + (rect.w - dims.width) / 2.0;
    let ty = rect.y + (rect.h + dims.height) / 2.0 - 2.0;
    draw_text(text, tx, ty, 14.0, WHITE);

    clicked
}

/// Apply typed characters and backspaces to a single-line buffer.
/// Control characters (Enter, Tab, ...) are ignored.
pub fn edit_text(text: &mut String, typed: &[char], backspaces: usize) {
    for _ in 0..backspaces {
        text.pop();
    }
    text.extend(typed.iter().filter(|c| !c.is_control()));
}

/// Draw a single-line text field. Clicking it takes focus, clicking elsewhere drops it.
pub fn text_field(ctx: &mut UiContext, rect: Rect, text: &str, placeholder: &str) {
    if ctx.mouse.left_pressed {
        ctx.text_focus = ctx.mouse.inside(&rect);
    }

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, FIELD_BG);
    let border = if ctx.text_focus { ACCENT_COLOR } else { Color::from_rgba(80, 80, 90, 255) };
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);

    let font_size = 16.0;
    let ty = (rect.y + (rect.h + font_size * 0.6) / 2.0).round();
    if text.is_empty() && !ctx.text_focus {
        draw_text(placeholder, rect.x + 6.0, ty, font_size, MUTED_COLOR);
        return;
    }

    draw_text(text, rect.x + 6.0, ty, font_size, TEXT_COLOR);

    // Blinking caret
    if ctx.text_focus && (get_time() * 2.0) as i64 % 2 == 0 {
        let dims = measure_text(text, None, font_size as u16, 1.0);
        let cx = rect.x + 7.0 + dims.width;
        draw_line(cx, rect.y + 5.0, cx, rect.bottom() - 5.0, 1.0, TEXT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_text() {
        let mut text = String::from("2 2");
        edit_text(&mut text, &[' ', '-', '1', '\r'], 0);
        assert_eq!(text, "2 2 -1");

        edit_text(&mut text, &['3'], 4);
        assert_eq!(text, "2 3");

        edit_text(&mut text, &[], 10);
        assert_eq!(text, "");
    }
}
