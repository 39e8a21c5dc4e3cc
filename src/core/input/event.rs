//=========================================================================
// Input Event Types
//
// Portable keyboard / pointer vocabulary consumed by the game states.
//
// The platform layer (winit) translates OS events into these types so
// that states and tests never touch a windowing library directly.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputState (press-edge tracking)
//         ↓
//    GameState::update()
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,
    /// Secondary button (typically right).
    Right,
    /// Wheel click.
    Middle,
    /// Side and extra buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical key location, independent of keyboard layout.
///
/// Escape is the only key the game reacts to; the platform layer drops
/// every other key before it reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Pointer coordinates are logical pixels, top-left origin, in the
/// 1280×720 game space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),
    MouseMoved { x: f32, y: f32 },
}

//=========================================================================
// Unit Tests
//=========================================================================
