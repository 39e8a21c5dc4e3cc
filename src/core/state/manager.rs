//=========================================================================
// State Manager
//=========================================================================
//
// Owns the active game state and the state saved across a pause.
//
// Invariants:
// - at most one state is active
// - the saved slot is occupied only while paused
// - `exit` on the outgoing state runs strictly before `enter` on the
//   incoming one
//
// Rejected requests are logged and leave everything unchanged.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{FrameContext, GameState, StateKind, Transition};
use crate::core::canvas::Canvas;
use crate::core::error::StateError;
use crate::core::logger::Logger;

//=== StateManager ========================================================

/// Single-slot state machine with a one-deep pause stack.
///
/// Starts empty; the game installs the menu with
/// [`change_state`](Self::change_state) at startup.
#[derive(Default)]
pub struct StateManager {
    current: Option<Box<dyn GameState>>,
    saved: Option<Box<dyn GameState>>,
    paused: bool,
}

impl StateManager {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::default()
    }

    //--- Transitions ------------------------------------------------------

    /// Replaces the active state.
    ///
    /// `None` is rejected with [`StateError::InvalidTransition`]. Entering a
    /// state that is not a pause overlay clears the paused flag and drops
    /// any saved state.
    pub fn change_state(
        &mut self,
        next: Option<Box<dyn GameState>>,
        logger: &Logger,
    ) -> Result<(), StateError> {
        let Some(next) = next else {
            return Err(reject(StateError::InvalidTransition, logger));
        };

        drop(self.install(next, logger));
        self.settle_pause_flag(logger);
        Ok(())
    }

    /// Saves the active state and shows `overlay` on top of the game.
    pub fn pause(&mut self, overlay: Box<dyn GameState>, logger: &Logger) -> Result<(), StateError> {
        if self.paused {
            return Err(reject(StateError::DoublePause, logger));
        }

        logger.info("Pausing game");
        self.paused = true;
        self.saved = self.install(overlay, logger);
        self.settle_pause_flag(logger);
        Ok(())
    }

    /// Restores the state saved by [`pause`](Self::pause).
    pub fn resume(&mut self, logger: &Logger) -> Result<(), StateError> {
        if !self.paused {
            return Err(reject(StateError::ResumeWithoutPause, logger));
        }

        let Some(saved) = self.saved.take() else {
            return Err(reject(StateError::NoSavedState, logger));
        };

        logger.info("Resuming game");
        self.paused = false;
        self.change_state(Some(saved), logger)
    }

    //--- Frame Loop -------------------------------------------------------

    /// Updates the active state and applies the transition it returns.
    pub fn update(&mut self, dt: f32, ctx: &FrameContext<'_>) -> Result<(), StateError> {
        let Some(state) = self.current.as_mut() else {
            return Ok(());
        };

        match state.update(dt, ctx) {
            Transition::None => Ok(()),
            Transition::Switch(next) => self.change_state(Some(next), ctx.logger),
            Transition::Pause(overlay) => self.pause(overlay, ctx.logger),
            Transition::Resume => self.resume(ctx.logger),
        }
    }

    /// Draws the active state, if any.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(state) = &self.current {
            state.draw(canvas);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> Option<&dyn GameState> {
        self.current.as_deref()
    }

    pub fn current_kind(&self) -> Option<StateKind> {
        self.current.as_ref().map(|s| s.kind())
    }

    /// Kind of the state waiting behind the pause overlay.
    pub fn saved_kind(&self) -> Option<StateKind> {
        self.saved.as_ref().map(|s| s.kind())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_saved_state(&self) -> bool {
        self.saved.is_some()
    }

    //--- Internal Helpers -------------------------------------------------

    /// Exits the current state, activates `next`, and hands back the old one.
    fn install(&mut self, mut next: Box<dyn GameState>, logger: &Logger) -> Option<Box<dyn GameState>> {
        let old_name = self.current_kind().map_or("None", StateKind::name);
        logger.info(&format!("State change: {} -> {}", old_name, next.kind()));

        let mut old = self.current.take();
        if let Some(state) = old.as_mut() {
            state.exit(logger);
        }

        next.enter(logger);
        self.current = Some(next);
        old
    }

    fn settle_pause_flag(&mut self, logger: &Logger) {
        if self.current_kind().is_some_and(StateKind::is_pause) {
            return;
        }

        self.paused = false;
        if let Some(saved) = self.saved.take() {
            logger.debug(&format!("Discarding state saved before pause: {}", saved.kind()));
        }
    }
}

//=== Helpers =============================================================

fn reject(err: StateError, logger: &Logger) -> StateError {
    logger.write(&format!("State manager: {err}"), err.level());
    err
}

//=========================================================================
// Unit Tests
//=========================================================================
