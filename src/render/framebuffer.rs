//! Software raster surface
//! Executes display lists into an RGBA buffer for tests and PNG export.

use std::path::Path;
use super::color::Rgba;
use super::commands::DrawCommand;

/// Error type for snapshot export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("framebuffer size {0}x{1} does not fit an image")]
    Size(usize, usize),
}

/// A text run drawn on the surface (not rasterized)
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Rgba,
}

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub text: Vec<TextRun>,
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            text: Vec::new(),
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
        self.text.clear();
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let p = &self.pixels[idx..idx + 4];
            Some(Rgba::with_alpha(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }

    /// Fill a rectangle, edges rounded to whole pixels and clipped to the buffer
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let clip = |v: f32, max: usize| v.round().clamp(0.0, max as f32) as usize;
        let (x0, x1) = (clip(x, self.width), clip(x + w, self.width));
        let (y0, y1) = (clip(y, self.height), clip(y + h, self.height));

        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Run every command of a display list in order
    pub fn execute(&mut self, list: &[DrawCommand]) {
        for cmd in list {
            match cmd {
                DrawCommand::Clear(color) => self.clear(*color),
                DrawCommand::FillRect { x, y, w, h, color } => self.fill_rect(*x, *y, *w, *h, *color),
                DrawCommand::FillText { text, x, y, color, .. } => self.text.push(TextRun {
                    text: text.clone(),
                    x: *x,
                    y: *y,
                    color: *color,
                }),
            }
        }
    }

    /// Save the buffer as a PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let size_err = || ExportError::Size(self.width, self.height);
        let w = u32::try_from(self.width).map_err(|_| size_err())?;
        let h = u32::try_from(self.height).map_err(|_| size_err())?;
        let img = image::RgbaImage::from_raw(w, h, self.pixels.clone()).ok_or_else(size_err)?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
