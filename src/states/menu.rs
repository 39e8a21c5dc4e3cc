//=========================================================================
// Menu State
//=========================================================================
//
// Title screen with a single Play button.
//
//=========================================================================

use crate::core::canvas::{Canvas, Color, Rect};
use crate::core::input::MouseButton;
use crate::core::logger::Logger;
use crate::core::state::{FrameContext, GameState, StateKind, Transition};

use super::{draw_centered, Button, PlayState, SCREEN_HEIGHT, SCREEN_WIDTH};

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 60.0;
const BACKGROUND: Color = Color::rgb(20, 30, 50);

//=== MenuState ===========================================================

pub struct MenuState {
    play: Button,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            play: Button::new("PLAY", Color::DARK_GREEN, Color::GREEN),
        }
    }

    pub fn play_button(&self) -> &Button {
        &self.play
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for MenuState {
    fn kind(&self) -> StateKind {
        StateKind::Menu
    }

    fn enter(&mut self, logger: &Logger) {
        logger.info("Entering Menu state");

        // Just below the vertical centre.
        let x = (SCREEN_WIDTH as f32 - BUTTON_WIDTH) / 2.0;
        let y = (SCREEN_HEIGHT / 2) as f32 + 50.0;
        self.play.place(Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT));
    }

    fn exit(&mut self, logger: &Logger) {
        logger.info("Leaving Menu state");
    }

    fn update(&mut self, _dt: f32, ctx: &FrameContext<'_>) -> Transition {
        let pointer = ctx.input.mouse_position();
        let pressed = ctx.input.is_button_pressed(MouseButton::Left);

        if self.play.track(pointer, pressed) {
            ctx.logger.info("Play button clicked, starting game");
            return Transition::Switch(Box::new(PlayState::new()));
        }

        Transition::None
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear_background(BACKGROUND);

        draw_centered(canvas, "SKIRMISH RTS", 200, 60, Color::GOLD);
        draw_centered(canvas, "Command & Conquer style", 270, 20, Color::LIGHT_GRAY);

        self.play.draw(canvas);

        draw_centered(canvas, "Click 'Play' to start", 650, 16, Color::GRAY);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
