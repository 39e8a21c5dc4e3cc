//=========================================================================
// Input
//=========================================================================
//
// Platform-independent input vocabulary and per-frame state.
//
// Components:
// - `event`: keys, mouse buttons and the `InputEvent` enum
// - `input_state`: held state and press-edge tracking
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod input_state;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use input_state::InputState;
