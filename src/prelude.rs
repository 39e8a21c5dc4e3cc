//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use skirmish::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game facade
pub use crate::engine::{Game, GameBuilder, GameConfig};

// Journal and errors
pub use crate::core::error::{LogError, StateError};
pub use crate::core::logger::{LogLevel, Logger};

// Timing
pub use crate::core::clock::{Clock, TimeSource};

// Input
pub use crate::core::input::{InputEvent, InputState, KeyCode, MouseButton};

// Drawing
pub use crate::core::canvas::{Canvas, Color, DrawList, Rect};

// State machine
pub use crate::core::state::{FrameContext, GameState, StateKind, StateManager, Transition};
pub use crate::states::{MenuState, PauseState, PlayState};
