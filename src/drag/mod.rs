//! Drag controller
//!
//! Turns pointer events into vertical moves of the melody. The machine only
//! decides; the app applies the returned effects.

mod machine;

pub use machine::*;
