//! Rendering
//!
//! The diagram is described as a display list of canvas primitives
//! (clear, fill-rect, fill-text) and then executed on a surface:
//! - `Framebuffer`: software RGBA buffer (tests, PNG export)
//! - `screen`: macroquad window drawing

mod color;
mod commands;
mod framebuffer;
pub mod screen;

pub use color::*;
pub use commands::*;
pub use framebuffer::*;
