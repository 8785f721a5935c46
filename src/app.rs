//! Application state
//!
//! `DiagramState` is an immutable snapshot (pattern + vertical offset); every
//! trigger produces a new snapshot and, when the canvas changes, a new retained frame.

use std::path::Path;
use crate::config::StaffConfig;
use crate::drag::{dispatch, DragContext, DragState, Effect, PointerEvent};
use crate::render::{redraw, redraw_snapped, DisplayList, ExportError, Framebuffer, MelodyStyle};
use crate::staff::{
    is_aligned, melody_note_ys, melody_range, melody_span, melody_start_y, snap, ParseError,
    ReferenceLines, SemitonePattern,
};

/// Melody pattern and its vertical offset
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramState {
    pub pattern: Option<SemitonePattern>,
    /// Vertical translation of the melody in pixels
    pub offset: f32,
}

impl DiagramState {
    /// No melody, offset at its initial value
    pub fn initial(config: &StaffConfig) -> Self {
        Self { pattern: None, offset: config.initial_offset() }
    }

    pub fn with_pattern(&self, pattern: SemitonePattern) -> Self {
        Self { pattern: Some(pattern), offset: self.offset }
    }

    pub fn moved_by(&self, delta: f32) -> Self {
        Self { pattern: self.pattern.clone(), offset: self.offset + delta }
    }

    /// Unsnapped note positions, `None` without a melody
    pub fn note_ys(&self, config: &StaffConfig, staff: &ReferenceLines) -> Option<Vec<f32>> {
        let start_y = melody_start_y(staff.root_y(), self.offset);
        self.pattern
            .as_ref()
            .map(|p| melody_note_ys(p, start_y, config.semitone_spacing))
    }

    /// Grabbable horizontal span of the melody
    pub fn melody_span(&self, config: &StaffConfig) -> Option<(f32, f32)> {
        self.pattern
            .as_ref()
            .map(|p| melody_span(config.melody_x_start(), p.len(), config.note_stride()))
    }
}

/// Outcome of an alignment check
#[derive(Debug, Clone, PartialEq)]
pub enum Alignment {
    NoMelody,
    Misaligned,
    /// Every note within tolerance; carries the snapped note positions
    Snapped(Vec<f32>),
}

/// Check the melody against the staff and snap it when every note is aligned
pub fn check_alignment(state: &DiagramState, config: &StaffConfig, staff: &ReferenceLines) -> Alignment {
    let Some(pattern) = &state.pattern else {
        return Alignment::NoMelody;
    };

    let line_ys: Vec<f32> = staff.ys().collect();
    let start_y = melody_start_y(staff.root_y(), state.offset);
    let note_ys = melody_note_ys(pattern, start_y, config.semitone_spacing);

    if is_aligned(&note_ys, &line_ys, config.tolerance) {
        Alignment::Snapped(snap(&note_ys, &line_ys))
    } else {
        Alignment::Misaligned
    }
}

/// Whole widget: config, staff, current snapshot, drag machine and the retained canvas
pub struct AppState {
    pub config: StaffConfig,
    pub staff: ReferenceLines,
    pub diagram: DiagramState,
    pub drag: DragState,
    /// What the canvas currently shows; replaced only on repaint
    pub frame: DisplayList,
    /// Pattern text field contents
    pub input: String,
    /// Status message
    pub status: Option<String>,
}

impl AppState {
    pub fn new(config: StaffConfig) -> Self {
        let staff = ReferenceLines::major(config.semitone_spacing);
        let diagram = DiagramState::initial(&config);
        let frame = redraw(&config, &staff, None, diagram.offset, MelodyStyle::Neutral);
        Self {
            config,
            staff,
            diagram,
            drag: DragState::Idle,
            frame,
            input: String::new(),
            status: None,
        }
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status = Some(msg.to_string());
    }

    fn repaint(&mut self, style: MelodyStyle) {
        self.frame = redraw(
            &self.config,
            &self.staff,
            self.diagram.pattern.as_ref(),
            self.diagram.offset,
            style,
        );
    }

    /// "Show melody" trigger: parse the text field and draw the melody.
    /// On a parse error nothing changes except the status line.
    pub fn show_melody(&mut self) -> Result<(), ParseError> {
        match self.input.parse::<SemitonePattern>() {
            Ok(pattern) => {
                self.show_pattern(pattern);
                Ok(())
            }
            Err(e) => {
                eprintln!("Rejected melody {:?}: {}", self.input, e);
                self.set_status(&e.to_string());
                Err(e)
            }
        }
    }

    pub fn show_pattern(&mut self, pattern: SemitonePattern) {
        let range = melody_range(&pattern);
        println!("Showing melody of {} notes, range {} semitones", pattern.len(), range);
        self.set_status(&format!("{} notes, range {} semitones", pattern.len(), range));

        self.diagram = self.diagram.with_pattern(pattern);
        self.drag = DragState::Idle;
        self.repaint(MelodyStyle::Neutral);
    }

    /// "Reset" trigger: staff only, offset back to its initial value
    pub fn reset(&mut self) {
        self.diagram = DiagramState::initial(&self.config);
        self.drag = DragState::Idle;
        self.repaint(MelodyStyle::Neutral);
        self.status = None;
        println!("Reset");
    }

    pub fn drag_context(&self, canvas_origin: (f32, f32)) -> DragContext {
        DragContext {
            canvas_origin,
            melody_span: self.diagram.melody_span(&self.config),
            recheck_on_any_release: self.config.recheck_on_any_release,
        }
    }

    /// Feed one pointer event through the drag machine and apply its effects
    pub fn handle_pointer(&mut self, event: PointerEvent, canvas_origin: (f32, f32)) {
        let ctx = self.drag_context(canvas_origin);
        let (next, effects) = dispatch(self.drag, event, &ctx);
        self.drag = next;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::MoveMelody { delta } => self.diagram = self.diagram.moved_by(delta),
            Effect::Repaint(style) => self.repaint(style),
            Effect::CheckAlignment => {
                self.check_alignment();
            }
        }
    }

    /// Run the alignment check; when aligned, repaint snapped in the success color.
    /// A misaligned melody leaves the canvas as it is.
    pub fn check_alignment(&mut self) -> bool {
        match check_alignment(&self.diagram, &self.config, &self.staff) {
            Alignment::Snapped(ys) => {
                println!("All aligned");
                self.frame = redraw_snapped(&self.config, &self.staff, &ys);
                self.set_status("Aligned!");
                true
            }
            Alignment::Misaligned | Alignment::NoMelody => false,
        }
    }

    /// Rasterize the current canvas and save it as a PNG
    pub fn export_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let mut fb = Framebuffer::new(
            self.config.canvas_width.max(0.0) as usize,
            self.config.canvas_height.max(0.0) as usize,
        );
        fb.execute(&self.frame);
        fb.save_png(path)
    }
}
