//! Staff layout and behavior configuration
//!
//! Uses RON (Rusty Object Notation) so the layout can be tweaked by hand.
//! Every field has a default, so a config file only needs the values it changes.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::render::Rgba;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "melody_staff.ron";

/// Largest canvas side accepted, in pixels
pub const MAX_CANVAS_SIDE: f32 = 4096.0;

/// Error type for config loading and saving
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Colors used when painting the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub reference: Rgba,
    pub label: Rgba,
    /// Melody color while dragging or unaligned
    pub neutral: Rgba,
    /// Melody color once snapped onto the staff
    pub success: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            reference: Rgba::GREEN,
            label: Rgba::BLACK,
            neutral: Rgba::BLUE,
            success: Rgba::GREEN,
        }
    }
}

/// Geometry and behavior constants for the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffConfig {
    /// Canvas size in pixels
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Vertical pixels per semitone
    pub semitone_spacing: f32,
    /// Length of a reference (solfege) bar
    pub reference_bar_length: f32,
    /// Thickness of every bar, centered on its y
    pub bar_thickness: f32,
    /// Length of one melody note bar
    pub note_length: f32,
    /// Gap between consecutive melody note bars
    pub note_separation: f32,
    pub label_font_size: f32,
    /// Label position relative to the left end of its bar (x right, y up)
    pub label_inset: (f32, f32),
    /// Initial vertical offset, in semitone spacings
    pub initial_offset_steps: f32,
    /// Max pixel distance between a note and a line for them to count as aligned
    pub tolerance: f32,
    /// Re-check alignment on every canvas pointer-up, not only when a drag ends
    pub recheck_on_any_release: bool,
    pub palette: Palette,
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 800.0,
            semitone_spacing: 50.0,
            reference_bar_length: 100.0,
            bar_thickness: 4.0,
            note_length: 60.0,
            note_separation: 10.0,
            label_font_size: 16.0,
            label_inset: (5.0, 5.0),
            initial_offset_steps: -6.0,
            tolerance: 5.0,
            recheck_on_any_release: false,
            palette: Palette::default(),
        }
    }
}

impl StaffConfig {
    /// X where the first melody note starts (one sixth of the canvas)
    pub fn melody_x_start(&self) -> f32 {
        self.canvas_width / 6.0
    }

    /// Horizontal advance from one melody note to the next
    pub fn note_stride(&self) -> f32 {
        self.note_length + self.note_separation
    }

    /// Vertical offset the melody starts at, and returns to on reset
    pub fn initial_offset(&self) -> f32 {
        self.initial_offset_steps * self.semitone_spacing
    }

    /// Reject values that would collapse or flip the staff, or that can't be rasterized
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        // Positive spacing keeps line y strictly decreasing with semitone
        if !(self.semitone_spacing.is_finite() && self.semitone_spacing > 0.0) {
            return invalid(format!("semitone_spacing must be positive, got {}", self.semitone_spacing));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return invalid(format!("tolerance must be zero or more, got {}", self.tolerance));
        }
        for (name, side) in [("canvas_width", self.canvas_width), ("canvas_height", self.canvas_height)] {
            if !(1.0..=MAX_CANVAS_SIDE).contains(&side) {
                return invalid(format!("{} must be between 1 and {}, got {}", name, MAX_CANVAS_SIDE, side));
            }
        }
        let lengths = [
            ("reference_bar_length", self.reference_bar_length),
            ("bar_thickness", self.bar_thickness),
            ("note_length", self.note_length),
            ("note_separation", self.note_separation),
            ("label_font_size", self.label_font_size),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value >= 0.0) {
                return invalid(format!("{} must be zero or more, got {}", name, value));
            }
        }
        if !self.initial_offset_steps.is_finite() {
            return invalid(format!("initial_offset_steps must be finite, got {}", self.initial_offset_steps));
        }
        Ok(())
    }
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StaffConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load a config from a RON string
pub fn load_config_from_str(s: &str) -> Result<StaffConfig, ConfigError> {
    let config: StaffConfig = ron::from_str(s)?;
    config.validate()?;
    Ok(config)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &StaffConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Resolve the config for this run: explicit path, then the default file, then built-in defaults.
/// Failures are reported and fall back to defaults so the widget always starts.
pub fn load_or_default(path: Option<&Path>) -> StaffConfig {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    if !path.exists() {
        println!("No config at {}, using defaults", path.display());
        return StaffConfig::default();
    }

    match load_config(path) {
        Ok(config) => {
            println!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}, using defaults", path.display(), e);
            StaffConfig::default()
        }
    }
}
