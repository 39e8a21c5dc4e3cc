//=========================================================================
// Core Systems
//
// Everything the frame loop needs, independent of the window host.
//
// Responsibilities:
// - Journal (`logger`) and error types (`error`)
// - Frame timing (`clock`)
// - Per-frame input snapshot (`input`)
// - Drawing surface abstraction (`canvas`)
// - Game state machine (`state`)
//
// Nothing here touches Winit; the platform layer feeds these types and
// tests drive them directly.
//
//=========================================================================

pub mod canvas;
pub mod clock;
pub mod error;
pub mod input;
pub mod logger;
pub mod state;
