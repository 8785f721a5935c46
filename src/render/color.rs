//! RGBA color shared by every drawing surface

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };
    // CSS "green", not full-intensity
    pub const GREEN: Rgba = Rgba { r: 0, g: 128, b: 0, a: 255 };
    pub const BLUE: Rgba = Rgba { r: 0, g: 0, b: 255, a: 255 };

    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to a macroquad color for on-screen drawing
    pub fn to_macroquad(self) -> macroquad::prelude::Color {
        macroquad::prelude::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}
