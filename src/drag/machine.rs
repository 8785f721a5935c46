//! Drag state machine: (state, event) -> (state, effects)

use crate::render::MelodyStyle;

/// Pointer input, in client (window) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// Pointer left the canvas
    Leave,
}

/// Drag machine state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Melody grabbed; `anchor_y` is the canvas-local y of the last pointer event
    Dragging { anchor_y: f32 },
}

/// Side effects requested by a transition, applied in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Add `delta` pixels to the vertical offset
    MoveMelody { delta: f32 },
    Repaint(MelodyStyle),
    /// Run the alignment check (and snap if aligned)
    CheckAlignment,
}

/// What the machine needs to know about the world for one event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    /// Top-left of the canvas in client coordinates
    pub canvas_origin: (f32, f32),
    /// Grabbable horizontal span of the melody (canvas-local), `None` when no melody is shown
    pub melody_span: Option<(f32, f32)>,
    /// Check alignment on any pointer-up, not just at the end of a drag
    pub recheck_on_any_release: bool,
}

impl DragContext {
    fn to_canvas(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.canvas_origin.0, y - self.canvas_origin.1)
    }

    fn hits_melody(&self, local_x: f32) -> bool {
        self.melody_span
            .is_some_and(|(start, end)| local_x >= start && local_x <= end)
    }
}

/// Advance the drag machine by one event
pub fn dispatch(state: DragState, event: PointerEvent, ctx: &DragContext) -> (DragState, Vec<Effect>) {
    match (state, event) {
        // A press on the melody (re)anchors the drag; elsewhere it changes nothing
        (_, PointerEvent::Down { x, y }) => {
            let (local_x, local_y) = ctx.to_canvas(x, y);
            if ctx.hits_melody(local_x) {
                (DragState::Dragging { anchor_y: local_y }, Vec::new())
            } else {
                (state, Vec::new())
            }
        }

        // Incremental: each move is measured from the previous event, not the press
        (DragState::Dragging { anchor_y }, PointerEvent::Move { x, y }) => {
            let (_, local_y) = ctx.to_canvas(x, y);
            let effects = vec![
                Effect::MoveMelody { delta: local_y - anchor_y },
                Effect::Repaint(MelodyStyle::Neutral),
            ];
            (DragState::Dragging { anchor_y: local_y }, effects)
        }
        (DragState::Idle, PointerEvent::Move { .. }) => (DragState::Idle, Vec::new()),

        (DragState::Dragging { .. }, PointerEvent::Up) => {
            (DragState::Idle, vec![Effect::CheckAlignment])
        }
        (DragState::Idle, PointerEvent::Up) => {
            let effects = if ctx.recheck_on_any_release {
                vec![Effect::CheckAlignment]
            } else {
                Vec::new()
            };
            (DragState::Idle, effects)
        }

        // Leaving the canvas drops the drag without checking
        (_, PointerEvent::Leave) => (DragState::Idle, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DragContext {
        DragContext {
            canvas_origin: (0.0, 0.0),
            melody_span: Some((100.0, 310.0)),
            recheck_on_any_release: false,
        }
    }

    /// Run events through the machine, returning the final state and the summed offset change
    fn run(events: &[PointerEvent], ctx: &DragContext) -> (DragState, f32, Vec<Effect>) {
        let mut state = DragState::Idle;
        let mut offset = 0.0;
        let mut all = Vec::new();
        for &event in events {
            let (next, effects) = dispatch(state, event, ctx);
            for effect in &effects {
                if let Effect::MoveMelody { delta } = effect {
                    offset += delta;
                }
            }
            all.extend(effects);
            state = next;
        }
        (state, offset, all)
    }

    #[test]
    fn test_press_on_melody_starts_drag() {
        let (state, effects) = dispatch(DragState::Idle, PointerEvent::Down { x: 150.0, y: 40.0 }, &ctx());
        assert_eq!(state, DragState::Dragging { anchor_y: 40.0 });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_span_edges_are_inclusive() {
        for x in [100.0, 310.0] {
            let (state, _) = dispatch(DragState::Idle, PointerEvent::Down { x, y: 0.0 }, &ctx());
            assert!(matches!(state, DragState::Dragging { .. }));
        }
    }

    #[test]
    fn test_press_outside_span_does_nothing() {
        let events = [
            PointerEvent::Down { x: 50.0, y: 100.0 },
            PointerEvent::Move { x: 50.0, y: 300.0 },
        ];
        let (state, offset, effects) = run(&events, &ctx());
        assert_eq!(state, DragState::Idle);
        assert_eq!(offset, 0.0);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_no_melody_no_drag() {
        let ctx = DragContext { melody_span: None, ..ctx() };
        let (state, _) = dispatch(DragState::Idle, PointerEvent::Down { x: 150.0, y: 0.0 }, &ctx);
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_moves_are_incremental() {
        let events = [
            PointerEvent::Down { x: 150.0, y: 100.0 },
            PointerEvent::Move { x: 150.0, y: 130.0 },
            PointerEvent::Move { x: 150.0, y: 110.0 },
        ];
        let (state, offset, effects) = run(&events, &ctx());
        assert_eq!(offset, 10.0);
        assert_eq!(state, DragState::Dragging { anchor_y: 110.0 });
        assert_eq!(
            effects,
            vec![
                Effect::MoveMelody { delta: 30.0 },
                Effect::Repaint(MelodyStyle::Neutral),
                Effect::MoveMelody { delta: -20.0 },
                Effect::Repaint(MelodyStyle::Neutral),
            ]
        );
    }

    #[test]
    fn test_client_coordinates_are_made_canvas_local() {
        let ctx = DragContext { canvas_origin: (200.0, 40.0), ..ctx() };
        // Client x 250 is canvas x 50, left of the melody
        let (state, _) = dispatch(DragState::Idle, PointerEvent::Down { x: 250.0, y: 90.0 }, &ctx);
        assert_eq!(state, DragState::Idle);

        let (state, _) = dispatch(DragState::Idle, PointerEvent::Down { x: 350.0, y: 90.0 }, &ctx);
        assert_eq!(state, DragState::Dragging { anchor_y: 50.0 });
    }

    #[test]
    fn test_release_checks_alignment() {
        let dragging = DragState::Dragging { anchor_y: 0.0 };
        let (state, effects) = dispatch(dragging, PointerEvent::Up, &ctx());
        assert_eq!(state, DragState::Idle);
        assert_eq!(effects, vec![Effect::CheckAlignment]);
    }

    #[test]
    fn test_leave_ends_drag_without_check() {
        let dragging = DragState::Dragging { anchor_y: 0.0 };
        let (state, effects) = dispatch(dragging, PointerEvent::Leave, &ctx());
        assert_eq!(state, DragState::Idle);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_idle_release_rechecks_only_when_enabled() {
        let up = PointerEvent::Up;
        let (_, effects) = dispatch(DragState::Idle, up, &ctx());
        assert!(effects.is_empty());

        let parity = DragContext { recheck_on_any_release: true, ..ctx() };
        let (state, effects) = dispatch(DragState::Idle, up, &parity);
        assert_eq!(state, DragState::Idle);
        assert_eq!(effects, vec![Effect::CheckAlignment]);
    }
}
