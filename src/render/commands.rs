//! Display-list renderer for the staff and melody

use crate::config::StaffConfig;
use crate::staff::{melody_note_ys, melody_start_y, note_xs, ReferenceLines, SemitonePattern};
use super::color::Rgba;

/// One canvas primitive. Coordinates are canvas-local pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas
    Clear(Rgba),
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Rgba },
    /// Text with its baseline at `y`
    FillText { text: String, x: f32, y: f32, size: f32, color: Rgba },
}

pub type DisplayList = Vec<DrawCommand>;

/// How the melody is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MelodyStyle {
    /// Default color while dragging or unaligned
    Neutral,
    /// Melody snapped onto the staff
    Success,
}

impl MelodyStyle {
    pub fn color(self, config: &StaffConfig) -> Rgba {
        match self {
            MelodyStyle::Neutral => config.palette.neutral,
            MelodyStyle::Success => config.palette.success,
        }
    }
}

/// Horizontal bar of configured thickness centered on `y`
fn bar(x: f32, y: f32, length: f32, config: &StaffConfig, color: Rgba) -> DrawCommand {
    let h = config.bar_thickness;
    DrawCommand::FillRect { x, y: y - h / 2.0, w: length, h, color }
}

/// Reference bars at the left edge, each with its solfege label above it
pub fn draw_reference_lines(list: &mut DisplayList, config: &StaffConfig, staff: &ReferenceLines) {
    let (inset_x, inset_y) = config.label_inset;
    for line in staff.lines() {
        list.push(bar(0.0, line.y, config.reference_bar_length, config, config.palette.reference));
        list.push(DrawCommand::FillText {
            text: line.label.to_string(),
            x: inset_x,
            y: line.y - inset_y,
            size: config.label_font_size,
            color: config.palette.label,
        });
    }
}

/// One bar per note, left to right from the melody start x
pub fn draw_note_bars(list: &mut DisplayList, config: &StaffConfig, note_ys: &[f32], color: Rgba) {
    let xs = note_xs(config.melody_x_start(), note_ys.len(), config.note_stride());
    for (x, &y) in xs.zip(note_ys) {
        list.push(bar(x, y, config.note_length, config, color));
    }
}

/// Melody bars following the raw steps from `start_y`
pub fn draw_melody(
    list: &mut DisplayList,
    config: &StaffConfig,
    pattern: &SemitonePattern,
    start_y: f32,
    color: Rgba,
) {
    let ys = melody_note_ys(pattern, start_y, config.semitone_spacing);
    draw_note_bars(list, config, &ys, color);
}

/// Full repaint: clear, staff, then the melody (if any) at `offset`
pub fn redraw(
    config: &StaffConfig,
    staff: &ReferenceLines,
    pattern: Option<&SemitonePattern>,
    offset: f32,
    style: MelodyStyle,
) -> DisplayList {
    let mut list = vec![DrawCommand::Clear(config.palette.background)];
    draw_reference_lines(&mut list, config, staff);
    if let Some(pattern) = pattern {
        let start_y = melody_start_y(staff.root_y(), offset);
        draw_melody(&mut list, config, pattern, start_y, style.color(config));
    }
    list
}

/// Full repaint with notes at explicit (snapped) positions in the success color
pub fn redraw_snapped(config: &StaffConfig, staff: &ReferenceLines, snapped_ys: &[f32]) -> DisplayList {
    let mut list = vec![DrawCommand::Clear(config.palette.background)];
    draw_reference_lines(&mut list, config, staff);
    draw_note_bars(&mut list, config, snapped_ys, MelodyStyle::Success.color(config));
    list
}
