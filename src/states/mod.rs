//=========================================================================
// Game States
//=========================================================================
//
// The three modes of the phase one skeleton.
//
//   MenuState ──Play──> PlayState ──Escape──> PauseState
//       ^                   ^                     │
//       │                   └──Resume / Escape────┤
//       └────────────────────────Quit─────────────┘
//
// Layout is computed against a fixed 1280×720 logical screen.
//
//=========================================================================

//=== Module Declarations =================================================

mod menu;
mod pause;
mod play;
mod widgets;

//=== Public API ==========================================================

pub use menu::MenuState;
pub use pause::PauseState;
pub use play::PlayState;
pub use widgets::Button;

use crate::core::canvas::{Canvas, Color};

//=== Screen ==============================================================

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: i32 = 1280;

/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: i32 = 720;

/// X coordinate that horizontally centres `text` on the screen.
pub(crate) fn centered_x(canvas: &dyn Canvas, text: &str, size: i32) -> i32 {
    (SCREEN_WIDTH - canvas.measure_text(text, size)) / 2
}

/// Draws `text` horizontally centred at height `y`.
pub(crate) fn draw_centered(canvas: &mut dyn Canvas, text: &str, y: i32, size: i32, color: Color) {
    let x = centered_x(canvas, text, size);
    canvas.draw_text(text, x, y, size, color);
}

//=========================================================================
// Test Support
//=========================================================================
