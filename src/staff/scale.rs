//! Major-scale reference lines

use super::geometry::vertical_position_for_semitone;

/// Semitone offsets of one major-scale octave, root to root
pub const MAJOR_SCALE_SEMITONES: [i32; 8] = [0, 2, 4, 5, 7, 9, 11, 12];

/// Solfege label for each entry of `MAJOR_SCALE_SEMITONES`
pub const MAJOR_SCALE_SOLFEGE: [&str; 8] = ["Do", "Re", "Mi", "Fa", "Sol", "La", "Ti", "Do"];

/// One line of the reference staff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub semitone: i32,
    pub label: &'static str,
    pub y: f32,
}

/// The fixed reference staff, ordered by ascending semitone (so descending y)
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLines {
    lines: Vec<ReferenceLine>,
}

impl ReferenceLines {
    /// Build the major-scale staff for the given semitone spacing
    pub fn major(spacing: f32) -> Self {
        let lines = MAJOR_SCALE_SEMITONES
            .iter()
            .zip(MAJOR_SCALE_SOLFEGE)
            .map(|(&semitone, label)| ReferenceLine {
                semitone,
                label,
                y: vertical_position_for_semitone(semitone, spacing),
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[ReferenceLine] {
        &self.lines
    }

    /// Line y-positions in staff order
    pub fn ys(&self) -> impl Iterator<Item = f32> + '_ {
        self.lines.iter().map(|line| line.y)
    }

    /// The lowest line (root "Do"); melodies are positioned relative to it
    pub fn root_y(&self) -> f32 {
        self.lines[0].y
    }
}
