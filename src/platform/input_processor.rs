//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit events into game InputEvents.
//
// Architecture:
//   Winit Events → input_processor → InputEvent → InputState
//
// Pointer positions arrive in physical pixels and leave in logical
// pixels. Keys outside the game's small key set are filtered (None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== Event Processing ====================================================

/// Converts a Winit key event, dropping unmapped keys.
pub(crate) fn process_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    key_input(key_event.physical_key, key_event.state)
}

pub(crate) fn process_mouse_button(button: WinitMouseButton, state: ElementState) -> InputEvent {
    let button = MouseButton::from(button);
    match state {
        ElementState::Pressed => InputEvent::MouseButtonDown(button),
        ElementState::Released => InputEvent::MouseButtonUp(button),
    }
}

/// Converts a physical cursor position to logical game coordinates.
pub(crate) fn process_cursor_move(position: PhysicalPosition<f64>, scale_factor: f64) -> InputEvent {
    let logical = position.to_logical::<f32>(scale_factor);
    InputEvent::MouseMoved {
        x: logical.x,
        y: logical.y,
    }
}

//--- Internal Helpers ----------------------------------------------------

fn key_input(physical: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let key = match physical {
        PhysicalKey::Code(code) => map_key(code)?,
        PhysicalKey::Unidentified(_) => return None,
    };

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps the keys the game reacts to.
fn map_key(code: WinitKeyCode) -> Option<KeyCode> {
    match code {
        WinitKeyCode::Escape => Some(KeyCode::Escape),
        _ => None,
    }
}

/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn escape_press_and_release() {
        assert_eq!(
            key_input(PhysicalKey::Code(WinitKeyCode::Escape), ElementState::Pressed),
            Some(InputEvent::KeyDown(KeyCode::Escape))
        );
        assert_eq!(
            key_input(PhysicalKey::Code(WinitKeyCode::Escape), ElementState::Released),
            Some(InputEvent::KeyUp(KeyCode::Escape))
        );
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        assert_eq!(
            key_input(PhysicalKey::Code(WinitKeyCode::F13), ElementState::Pressed),
            None
        );
        assert_eq!(
            key_input(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed
            ),
            None
        );
    }

    #[test]
    fn only_escape_is_mapped() {
        assert_eq!(map_key(WinitKeyCode::Escape), Some(KeyCode::Escape));
        assert_eq!(map_key(WinitKeyCode::Space), None);
        assert_eq!(map_key(WinitKeyCode::Enter), None);
        assert_eq!(map_key(WinitKeyCode::KeyP), None);
        assert_eq!(map_key(WinitKeyCode::KeyA), None);
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }

    #[test]
    fn mouse_button_edges() {
        assert_eq!(
            process_mouse_button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown(MouseButton::Left)
        );
        assert_eq!(
            process_mouse_button(WinitMouseButton::Left, ElementState::Released),
            InputEvent::MouseButtonUp(MouseButton::Left)
        );
    }

    #[test]
    fn cursor_is_scaled_to_logical_pixels() {
        let event = process_cursor_move(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(event, InputEvent::MouseMoved { x: 100.0, y: 50.0 });
    }

    #[test]
    fn cursor_at_unit_scale_is_unchanged() {
        let event = process_cursor_move(PhysicalPosition::new(123.5, 456.5), 1.0);
        assert_eq!(event, InputEvent::MouseMoved { x: 123.5, y: 456.5 });
    }
}
