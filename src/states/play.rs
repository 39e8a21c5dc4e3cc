//=========================================================================
// Play State
//=========================================================================
//
// In-game placeholder. Counts play time; Escape opens the pause menu.
//
// Every enter restarts the play-time counter, including the re-enter
// that follows a resume.
//
//=========================================================================

use crate::core::canvas::{Canvas, Color};
use crate::core::input::KeyCode;
use crate::core::logger::Logger;
use crate::core::state::{FrameContext, GameState, StateKind, Transition};

use super::{draw_centered, PauseState};

//=== PlayState ===========================================================

#[derive(Debug, Default)]
pub struct PlayState {
    play_time: f32,
}

impl PlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since this state was last entered.
    pub fn play_time(&self) -> f32 {
        self.play_time
    }
}

impl GameState for PlayState {
    fn kind(&self) -> StateKind {
        StateKind::Game
    }

    fn enter(&mut self, logger: &Logger) {
        self.play_time = 0.0;
        logger.info("Entering Game state");
    }

    fn exit(&mut self, logger: &Logger) {
        logger.info("Leaving Game state");
    }

    fn update(&mut self, dt: f32, ctx: &FrameContext<'_>) -> Transition {
        self.play_time += dt;

        if ctx.input.is_key_pressed(KeyCode::Escape) {
            ctx.logger.info("Escape pressed, pausing");
            return Transition::Pause(Box::new(PauseState::new()));
        }

        Transition::None
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear_background(Color::FOREST_GREEN);

        canvas.draw_text("GAME IN PROGRESS", 20, 20, 30, Color::WHITE);
        let time = format!("Play time: {:.1} seconds", self.play_time);
        canvas.draw_text(&time, 20, 60, 20, Color::WHITE);
        canvas.draw_text("Press ESCAPE to pause", 20, 90, 20, Color::LIGHT_GRAY);

        draw_centered(canvas, "Phase 1: core architecture OK!", 300, 40, Color::YELLOW);
        draw_centered(canvas, "Next phase: resource system", 360, 20, Color::WHITE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
