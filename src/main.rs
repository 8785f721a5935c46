//! Melody Staff: draggable melody diagram over a solfege staff
//!
//! - Fixed reference staff: one major-scale octave, Do to Do
//! - Melody entered as semitone steps ("2 2 1 2 2 2 1")
//! - Drag the melody vertically; release it on the staff to snap
//!
//! Usage: `melody-staff [config.ron]` or `melody-staff --write-config [path]`

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod staff;
mod render;
mod drag;
mod ui;
mod config;
mod app;

use std::path::PathBuf;
use macroquad::prelude::*;
use app::AppState;
use config::{load_config, load_or_default, save_config, StaffConfig, CONFIG_FILE};
use render::screen::present;
use ui::{edit_text, text_button, text_field, MouseState, PointerTracker, Rect, UiContext};

/// Toolbar above the canvas
const TOOLBAR_HEIGHT: f32 = 40.0;
/// Status line below the canvas
const STATUS_HEIGHT: f32 = 24.0;
/// Where F12 writes the canvas snapshot
const SNAPSHOT_FILE: &str = "melody_staff.png";

const BG_COLOR: Color = Color::new(0.10, 0.10, 0.12, 1.0);
const BUTTON_COLOR: Color = Color::new(0.2, 0.3, 0.4, 1.0);
const STATUS_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Config path from the first non-flag argument
fn config_path() -> Option<PathBuf> {
    std::env::args().skip(1).find(|a| !a.starts_with("--")).map(PathBuf::from)
}

fn window_conf() -> Conf {
    let config = config_path()
        .or_else(|| Some(PathBuf::from(CONFIG_FILE)))
        .and_then(|p| load_config(p).ok())
        .unwrap_or_default();

    Conf {
        window_title: format!("Melody Staff v{}", VERSION),
        window_width: config.canvas_width as i32,
        window_height: (TOOLBAR_HEIGHT + config.canvas_height + STATUS_HEIGHT) as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if std::env::args().any(|a| a == "--write-config") {
        let path = config_path().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        match save_config(&StaffConfig::default(), &path) {
            Ok(()) => println!("Wrote default config to {}", path.display()),
            Err(e) => eprintln!("Failed to write {}: {}", path.display(), e),
        }
        return;
    }

    println!("=== Melody Staff v{} ===", VERSION);

    let config = load_or_default(config_path().as_deref());
    let mut app = AppState::new(config);
    let mut ui_ctx = UiContext::new();
    let mut pointer = PointerTracker::new();

    // Mouse state tracking
    let mut last_left_down = false;

    loop {
        let mouse_pos = mouse_position();
        let left_down = is_mouse_button_down(MouseButton::Left);
        let mouse_state = MouseState {
            x: mouse_pos.0,
            y: mouse_pos.1,
            left_down,
            left_pressed: left_down && !last_left_down,
            left_released: !left_down && last_left_down,
        };
        last_left_down = left_down;
        ui_ctx.begin_frame(mouse_state);

        clear_background(BG_COLOR);

        // === TOOLBAR ===
        let field_rect = Rect::new(8.0, 6.0, 300.0, TOOLBAR_HEIGHT - 12.0);
        text_field(&mut ui_ctx, field_rect, &app.input, "semitone steps, e.g. 2 2 1 2");

        let mut submit = false;
        if ui_ctx.text_focus {
            let mut typed = Vec::new();
            while let Some(c) = get_char_pressed() {
                typed.push(c);
            }
            let backspaces = usize::from(is_key_pressed(KeyCode::Backspace));
            edit_text(&mut app.input, &typed, backspaces);
            submit = is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter);
        }

        let show_rect = Rect::new(field_rect.right() + 8.0, 6.0, 110.0, TOOLBAR_HEIGHT - 12.0);
        let reset_rect = Rect::new(show_rect.right() + 8.0, 6.0, 80.0, TOOLBAR_HEIGHT - 12.0);
        if text_button(&mut ui_ctx, show_rect, "Show melody", BUTTON_COLOR) || submit {
            // Errors are already on the status line
            let _ = app.show_melody();
        }
        if text_button(&mut ui_ctx, reset_rect, "Reset", BUTTON_COLOR) {
            app.reset();
        }

        // === CANVAS ===
        let canvas = Rect::new(0.0, TOOLBAR_HEIGHT, app.config.canvas_width, app.config.canvas_height);
        for event in pointer.update(&mouse_state, &canvas) {
            app.handle_pointer(event, (canvas.x, canvas.y));
        }
        present(&app.frame, canvas);

        if is_key_pressed(KeyCode::F12) {
            match app.export_png(SNAPSHOT_FILE) {
                Ok(()) => {
                    println!("Saved snapshot to {}", SNAPSHOT_FILE);
                    app.set_status(&format!("Saved {}", SNAPSHOT_FILE));
                }
                Err(e) => {
                    eprintln!("Snapshot failed: {}", e);
                    app.set_status(&format!("Snapshot failed: {}", e));
                }
            }
        }

        // === STATUS ===
        if let Some(msg) = &app.status {
            draw_text(msg, 8.0, canvas.bottom() + STATUS_HEIGHT - 7.0, 16.0, STATUS_COLOR);
        }

        next_frame().await
    }
}
