//! Staff model
//!
//! Pure geometry for the solfege reference staff and the melody laid over it:
//! - Reference lines from the major-scale template
//! - Semitone patterns (step sequences) and their note positions
//! - Alignment check and snapping onto the staff

mod scale;
mod pattern;
mod geometry;
mod alignment;

pub use scale::*;
pub use pattern::*;
pub use geometry::*;
pub use alignment::*;
