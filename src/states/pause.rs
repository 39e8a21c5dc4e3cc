//=========================================================================
// Pause State
//=========================================================================
//
// Overlay shown over a paused game: Resume, Quit to menu, or Escape.
//
// The overlay never talks to the state manager directly; it returns
// `Transition::Resume` and the manager restores the saved game.
//
//=========================================================================

use crate::core::canvas::{Canvas, Color, Rect};
use crate::core::input::{KeyCode, MouseButton};
use crate::core::logger::Logger;
use crate::core::state::{FrameContext, GameState, StateKind, Transition};

use super::{draw_centered, Button, MenuState, SCREEN_HEIGHT, SCREEN_WIDTH};

const BUTTON_WIDTH: f32 = 250.0;
const BUTTON_HEIGHT: f32 = 60.0;
const BUTTON_SPACING: f32 = 20.0;
const SHADE: Color = Color::rgba(0, 0, 0, 180);

//=== PauseState ==========================================================

pub struct PauseState {
    resume: Button,
    quit: Button,
}

impl PauseState {
    pub fn new() -> Self {
        Self {
            resume: Button::new("RESUME", Color::rgb(0, 150, 0), Color::rgb(0, 200, 0)),
            quit: Button::new("QUIT", Color::rgb(150, 0, 0), Color::rgb(200, 0, 0)),
        }
    }

    pub fn resume_button(&self) -> &Button {
        &self.resume
    }

    pub fn quit_button(&self) -> &Button {
        &self.quit
    }
}

impl Default for PauseState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for PauseState {
    fn kind(&self) -> StateKind {
        StateKind::Pause
    }

    fn enter(&mut self, logger: &Logger) {
        logger.info("Entering Pause state");

        let x = (SCREEN_WIDTH as f32 - BUTTON_WIDTH) / 2.0;
        let centre_y = (SCREEN_HEIGHT / 2) as f32;
        self.resume.place(Rect::new(
            x,
            centre_y - BUTTON_HEIGHT - BUTTON_SPACING / 2.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ));
        self.quit.place(Rect::new(
            x,
            centre_y + BUTTON_SPACING / 2.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        ));
    }

    fn exit(&mut self, logger: &Logger) {
        logger.info("Leaving Pause state");
    }

    fn update(&mut self, _dt: f32, ctx: &FrameContext<'_>) -> Transition {
        let pointer = ctx.input.mouse_position();
        let pressed = ctx.input.is_button_pressed(MouseButton::Left);

        // Both buttons refresh their highlight before any transition fires.
        let resume_clicked = self.resume.track(pointer, pressed);
        let quit_clicked = self.quit.track(pointer, pressed);

        if resume_clicked {
            ctx.logger.info("Resume button clicked");
            Transition::Resume
        } else if quit_clicked {
            ctx.logger.info("Quit button clicked, back to menu");
            Transition::Switch(Box::new(MenuState::new()))
        } else if ctx.input.is_key_pressed(KeyCode::Escape) {
            ctx.logger.info("Escape pressed, resuming");
            Transition::Resume
        } else {
            Transition::None
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
        canvas.fill_rect(screen, SHADE);

        draw_centered(canvas, "PAUSE", 150, 80, Color::WHITE);

        self.resume.draw(canvas);
        self.quit.draw(canvas);

        draw_centered(canvas, "Press ESCAPE to resume", 650, 16, Color::LIGHT_GRAY);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
