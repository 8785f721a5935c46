//! Geometry engine: semitones to pixel positions
//!
//! Screen y grows downward, so higher pitches get smaller y.

use super::pattern::SemitonePattern;

/// Y of a staff line for a semitone above the root.
/// Two spacings of headroom plus one octave: semitone 12 lands at `2 * spacing`.
pub fn vertical_position_for_semitone(semitone: i32, spacing: f32) -> f32 {
    2.0 * spacing + 12.0 * spacing - semitone as f32 * spacing
}

/// Running sum of the steps, shifted so the lowest note is 0.
/// Only used for range reporting; rendering works from the raw steps.
pub fn absolute_semitones(pattern: &SemitonePattern) -> Vec<i64> {
    let running: Vec<i64> = pattern
        .steps()
        .iter()
        .scan(0i64, |acc, &step| {
            *acc += i64::from(step);
            Some(*acc)
        })
        .collect();

    let min = running.iter().copied().min().unwrap_or(0);
    running.into_iter().map(|s| s - min).collect()
}

/// Pitch range of the melody in semitones (highest minus lowest note)
pub fn melody_range(pattern: &SemitonePattern) -> i64 {
    let absolute = absolute_semitones(pattern);
    let max = absolute.iter().copied().max().unwrap_or(0);
    let min = absolute.iter().copied().min().unwrap_or(0);
    max - min
}

/// Y of every melody note. Each raw step moves the previous y by `step * spacing`,
/// starting from `start_y` (the first note is already one step away from it).
pub fn melody_note_ys(pattern: &SemitonePattern, start_y: f32, spacing: f32) -> Vec<f32> {
    pattern
        .steps()
        .iter()
        .scan(start_y, |y, &step| {
            *y -= step as f32 * spacing;
            Some(*y)
        })
        .collect()
}

/// Where the melody starts: the root line moved by the current vertical offset
pub fn melody_start_y(root_y: f32, offset: f32) -> f32 {
    root_y + offset
}

/// Horizontal extent a pointer-down must hit to grab the melody (inclusive)
pub fn melody_span(x_start: f32, note_count: usize, stride: f32) -> (f32, f32) {
    (x_start, x_start + note_count as f32 * stride)
}

/// Left edge of each note bar, advancing by a fixed stride
pub fn note_xs(x_start: f32, note_count: usize, stride: f32) -> impl Iterator<Item = f32> {
    (0..note_count).map(move |i| x_start + i as f32 * stride)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(steps: &[i32]) -> SemitonePattern {
        SemitonePattern::new(steps.to_vec()).unwrap()
    }

    #[test]
    fn test_vertical_position() {
        assert_eq!(vertical_position_for_semitone(0, 50.0), 700.0);
        assert_eq!(vertical_position_for_semitone(12, 50.0), 100.0);
        assert_eq!(vertical_position_for_semitone(-2, 10.0), 160.0);
    }

    #[test]
    fn test_note_ys_follow_raw_steps() {
        assert_eq!(melody_note_ys(&pattern(&[2, 2, 3]), 500.0, 50.0), vec![400.0, 300.0, 150.0]);
        assert_eq!(melody_note_ys(&pattern(&[-1, 4]), 100.0, 10.0), vec![110.0, 70.0]);
    }

    #[test]
    fn test_note_ys_preserve_length() {
        let p = pattern(&[0, 5, -7, 2, 0, 1]);
        assert_eq!(melody_note_ys(&p, 0.0, 50.0).len(), p.len());
    }

    #[test]
    fn test_absolute_semitones_normalized() {
        assert_eq!(absolute_semitones(&pattern(&[2, 2, 1])), vec![0, 2, 3]);
        assert_eq!(absolute_semitones(&pattern(&[-3, 5, -4])), vec![0, 5, 1]);
    }

    #[test]
    fn test_range_ignores_baseline() {
        assert_eq!(melody_range(&pattern(&[2, 2, 1])), 3);
        assert_eq!(melody_range(&pattern(&[-3, 5, -4])), 5);
        assert_eq!(melody_range(&pattern(&[7])), 0);
    }

    #[test]
    fn test_range_of_extreme_steps_does_not_overflow() {
        let p = pattern(&[i32::MAX, i32::MAX, i32::MIN]);
        // Running sums: MAX, 2*MAX, MAX - 1
        assert_eq!(melody_range(&p), i64::from(i32::MAX) + 1);
    }

    #[test]
    fn test_span_and_note_xs() {
        assert_eq!(melody_span(100.0, 3, 70.0), (100.0, 310.0));
        let xs: Vec<f32> = note_xs(100.0, 3, 70.0).collect();
        assert_eq!(xs, vec![100.0, 170.0, 240.0]);
    }
}
