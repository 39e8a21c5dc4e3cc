//=========================================================================
// State System
//=========================================================================
//
// Game state contract and the single-slot state manager.
//
// Architecture:
//   StateManager
//     ├─ current: Option<Box<dyn GameState>>
//     ├─ saved:   Option<Box<dyn GameState>>   (only while paused)
//     └─ paused:  bool
//
// Flow:
//   update() → GameState::update() → Transition → change_state/pause/resume
//
// States never hold a handle to the manager. They describe the change
// they want by returning a `Transition`, and the manager applies it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::canvas::Canvas;
use crate::core::input::InputState;
use crate::core::logger::Logger;

//=== Module Declarations =================================================

mod manager;

//=== Public API ==========================================================

pub use manager::StateManager;

//=== StateKind ===========================================================

/// Which of the game's modes a state implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Menu,
    Game,
    Pause,
}

impl StateKind {
    /// Whether entering this state keeps the manager's paused flag.
    pub fn is_pause(self) -> bool {
        matches!(self, Self::Pause)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Game => "Game",
            Self::Pause => "Pause",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== Transition ==========================================================

/// Change requested by a state from its `update`.
#[derive(Default)]
pub enum Transition {
    /// Stay in the current state.
    #[default]
    None,

    /// Replace the current state.
    Switch(Box<dyn GameState>),

    /// Save the current state and show this overlay.
    Pause(Box<dyn GameState>),

    /// Return to the state saved by the last pause.
    Resume,
}

impl Transition {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Switch(next) => f.debug_tuple("Switch").field(&next.kind()).finish(),
            Self::Pause(overlay) => f.debug_tuple("Pause").field(&overlay.kind()).finish(),
            Self::Resume => f.write_str("Resume"),
        }
    }
}

//=== FrameContext ========================================================

/// Read-only data a state sees during `update`.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub input: &'a InputState,
    pub logger: &'a Logger,
}

impl<'a> FrameContext<'a> {
    pub fn new(input: &'a InputState, logger: &'a Logger) -> Self {
        Self { input, logger }
    }
}

//=== GameState Trait =====================================================

/// A mode of the application with its own lifecycle.
///
/// Only `kind`, `update` and `draw` are required; `enter` and `exit`
/// default to doing nothing.
///
/// ```rust
/// # use skirmish::core::canvas::Canvas;
/// # use skirmish::core::state::{FrameContext, GameState, StateKind, Transition};
/// struct Splash;
///
/// impl GameState for Splash {
///     fn kind(&self) -> StateKind {
///         StateKind::Menu
///     }
///
///     fn update(&mut self, _dt: f32, _ctx: &FrameContext<'_>) -> Transition {
///         Transition::None
///     }
///
///     fn draw(&self, _canvas: &mut dyn Canvas) {}
/// }
/// ```
pub trait GameState {
    fn kind(&self) -> StateKind;

    /// Called when the state becomes active (including on resume).
    fn enter(&mut self, _logger: &Logger) {}

    /// Called when the state stops being active (including on pause).
    fn exit(&mut self, _logger: &Logger) {}

    /// Advances the state by `dt` seconds. At most one transition per call.
    fn update(&mut self, dt: f32, ctx: &FrameContext<'_>) -> Transition;

    /// Renders the state. Must not change it.
    fn draw(&self, canvas: &mut dyn Canvas);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy(StateKind);

    impl GameState for Dummy {
        fn kind(&self) -> StateKind {
            self.0
        }
        fn update(&mut self, _dt: f32, _ctx: &FrameContext<'_>) -> Transition {
            Transition::None
        }
        fn draw(&self, _canvas: &mut dyn Canvas) {}
    }

    #[test]
    fn only_pause_kind_is_pause() {
        assert!(StateKind::Pause.is_pause());
        assert!(!StateKind::Menu.is_pause());
        assert!(!StateKind::Game.is_pause());
    }

    #[test]
    fn kind_names() {
        assert_eq!(StateKind::Menu.to_string(), "Menu");
        assert_eq!(StateKind::Game.to_string(), "Game");
        assert_eq!(StateKind::Pause.to_string(), "Pause");
    }

    #[test]
    fn transition_default_is_none() {
        assert!(Transition::default().is_none());
    }

    #[test]
    fn transition_debug_shows_target_kind() {
        let t = Transition::Pause(Box::new(Dummy(StateKind::Pause)));
        assert_eq!(format!("{t:?}"), "Pause(Pause)");

        let t = Transition::Switch(Box::new(Dummy(StateKind::Game)));
        assert_eq!(format!("{t:?}"), "Switch(Game)");

        assert_eq!(format!("{:?}", Transition::Resume), "Resume");
    }
}
