//! Semitone patterns: the melody as a sequence of steps

use std::str::FromStr;

/// Largest step magnitude accepted, in semitones (the MIDI note range)
pub const MAX_STEP: i32 = 127;

/// Error type for pattern input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("melody is empty, enter steps like \"2 2 -4\"")]
    Empty,
    #[error("step {index} is not a whole number: {token:?}")]
    InvalidStep { index: usize, token: String },
    #[error("step {index} ({step}) is larger than {max} semitones", max = MAX_STEP)]
    StepOutOfRange { index: usize, step: i32 },
}

/// A melody as signed semitone steps, each relative to the previous note.
/// The first step is relative to the melody's start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemitonePattern {
    steps: Vec<i32>,
}

impl SemitonePattern {
    /// Returns `None` for an empty step list
    pub fn new(steps: Vec<i32>) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    pub fn steps(&self) -> &[i32] {
        &self.steps
    }

    /// Number of notes (one per step)
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl FromStr for SemitonePattern {
    type Err = ParseError;

    /// Parse whitespace-separated signed decimal integers, e.g. `"2 2 -4 +1"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let steps = s
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                let step = token.parse::<i32>().map_err(|_| ParseError::InvalidStep {
                    index,
                    token: token.to_string(),
                })?;
                if step.abs() > MAX_STEP {
                    return Err(ParseError::StepOutOfRange { index, step });
                }
                Ok(step)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(steps).ok_or(ParseError::Empty)
    }
}
