//! Alignment checker: do all melody notes sit on staff lines?

/// True if every note y lies within `tolerance` (inclusive) of some line.
/// Stops at the first note that has no line nearby.
pub fn is_aligned(note_ys: &[f32], line_ys: &[f32], tolerance: f32) -> bool {
    note_ys
        .iter()
        .all(|&y| line_ys.iter().any(|&line| (line - y).abs() <= tolerance))
}

/// Line closest to `y`; on a tie the earlier line (lower semitone) wins.
/// Returns `y` unchanged when there are no lines.
pub fn closest_line(y: f32, line_ys: &[f32]) -> f32 {
    let mut best: Option<(f32, f32)> = None;
    for &line in line_ys {
        let diff = (line - y).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((line, diff)),
        }
    }
    best.map_or(y, |(line, _)| line)
}

/// Snapped note positions: each note's own y moved onto its closest line.
/// Notes are snapped independently, so a wide tolerance can't carry one note's
/// correction over into the next.
pub fn snap(note_ys: &[f32], line_ys: &[f32]) -> Vec<f32> {
    note_ys.iter().map(|&y| closest_line(y, line_ys)).collect()
}
