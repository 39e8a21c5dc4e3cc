//=========================================================================
// Game
//
// Configuration, wiring and per-frame sequencing.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  Platform (winit)
//         │                       │                    │
//         ├─ with_title()         ├─ start()           └─ one frame() per redraw
//         ├─ with_target_fps()    ├─ frame()
//         └─ with_log_path()      └─ shutdown()
// ```
//
// Frame order: clock tick → state update (+ transition) → state draw →
// FPS overlay. The loop itself never sleeps; cadence is left to the
// platform.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::canvas::{Canvas, Color, Rect};
use crate::core::clock::{Clock, TimeSource};
use crate::core::input::InputState;
use crate::core::logger::Logger;
use crate::core::state::{FrameContext, StateManager};
use crate::platform::{Platform, PlatformError};
use crate::states::{MenuState, SCREEN_WIDTH};

//=== GameConfig ==========================================================

/// Settings fixed at startup.
///
/// The logical resolution is always 1280×720 and the window is not
/// resizable.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub log_path: PathBuf,
    pub console_log: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Skirmish RTS - Phase 1".to_owned(),
            width: 1280,
            height: 720,
            target_fps: 60,
            log_path: PathBuf::from("logs_jeu.txt"),
            console_log: true,
        }
    }
}

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Title**: "Skirmish RTS - Phase 1"
/// - **Target FPS**: 60
/// - **Log file**: `logs_jeu.txt` (truncated on start)
///
/// # Examples
///
/// ```no_run
/// use skirmish::GameBuilder;
///
/// GameBuilder::new()
///     .with_target_fps(144)
///     .with_log_path("session.log")
///     .build()
///     .run()
///     .expect("event loop failed");
/// ```
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Sets the frame rate the platform caps the loop at.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "Target FPS must be positive, got {}", fps);
        self.config.target_fps = fps;
        self
    }

    /// Sets the journal file path.
    pub fn with_log_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.log_path = path.as_ref().to_path_buf();
        self
    }

    /// Enables or disables mirroring the journal to the console.
    pub fn with_console_log(mut self, enabled: bool) -> Self {
        self.config.console_log = enabled;
        self
    }

    /// Opens the journal and assembles the game. No state is active yet.
    pub fn build(self) -> Game {
        info!(
            "Building game ({}x{} @ {} FPS, log: {})",
            self.config.width,
            self.config.height,
            self.config.target_fps,
            self.config.log_path.display()
        );

        let mut logger = Logger::new().with_console(self.config.console_log);
        // Failure already reported; the game runs without a journal.
        let _ = logger.init(&self.config.log_path);

        Game {
            config: self.config,
            logger,
            clock: Clock::new(),
            states: StateManager::new(),
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// Owns the journal, the clock and the state manager.
///
/// The journal is closed by [`shutdown`](Game::shutdown), or on drop if
/// the game never shut down.
pub struct Game {
    config: GameConfig,
    logger: Logger,
    clock: Clock,
    states: StateManager,
}

impl Game {
    //--- Execution --------------------------------------------------------

    /// Opens the window and runs until it is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// aborts.
    pub fn run(mut self) -> Result<(), PlatformError> {
        self.start();
        let result = Platform::new(&mut self).and_then(Platform::run);
        self.shutdown();
        result
    }

    //--- Lifecycle --------------------------------------------------------

    /// Installs the menu as the initial state.
    pub fn start(&mut self) {
        self.logger.info("=== GAME STARTUP ===");
        self.logger.info(&format!(
            "Window {}x{}, target {} FPS",
            self.config.width, self.config.height, self.config.target_fps
        ));

        let _ = self
            .states
            .change_state(Some(Box::new(MenuState::new())), &self.logger);

        self.logger.info("=== INITIALIZATION COMPLETE ===");
    }

    /// Runs one frame: tick, update, draw, FPS overlay.
    pub fn frame(&mut self, input: &InputState, time: &impl TimeSource, canvas: &mut dyn Canvas) {
        self.clock.tick(time);

        let ctx = FrameContext::new(input, &self.logger);
        // Rejected transitions are logged by the manager.
        let _ = self.states.update(self.clock.delta_time(), &ctx);

        self.states.draw(canvas);
        self.draw_fps(canvas);
    }

    pub fn shutdown(&mut self) {
        self.logger.info(&format!("Session ended after {:.1}s", self.clock.total_time()));
        self.logger.info("=== GAME SHUTDOWN ===");
        self.logger.close();
    }

    //--- Accessors --------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn states(&self) -> &StateManager {
        &self.states
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    //--- Internal Helpers -------------------------------------------------

    fn draw_fps(&self, canvas: &mut dyn Canvas) {
        const SIZE: i32 = 20;

        let fps = self.clock.fps();
        let text = format!("FPS: {fps}");
        let width = canvas.measure_text(&text, SIZE);
        let x = SCREEN_WIDTH - width - 10;
        let y = 10;

        let backdrop = Rect::new((x - 5) as f32, (y - 5) as f32, (width + 10) as f32, 30.0);
        canvas.fill_rect(backdrop, Color::rgba(0, 0, 0, 150));
        canvas.draw_text(&text, x, y, SIZE, fps_color(fps));
    }
}

/// Green at 60+, yellow at 30+, red below.
fn fps_color(fps: u32) -> Color {
    match fps {
        60.. => Color::GREEN,
        30..=59 => Color::YELLOW,
        _ => Color::RED,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::{DrawCommand, DrawList};
    use crate::core::input::{InputEvent, KeyCode, MouseButton};
    use crate::core::state::{GameState, StateKind};

    struct Fixed(f32, u32);

    impl TimeSource for Fixed {
        fn frame_time(&self) -> f32 {
            self.0
        }
        fn fps(&self) -> u32 {
            self.1
        }
    }

    fn quiet_game(dir: &tempfile::TempDir) -> Game {
        GameBuilder::new()
            .with_console_log(false)
            .with_log_path(dir.path().join("game.log"))
            .build()
    }

    //=====================================================================
    // GameBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = GameBuilder::new();
        assert_eq!(builder.config.width, 1280);
        assert_eq!(builder.config.height, 720);
        assert_eq!(builder.config.target_fps, 60);
        assert_eq!(builder.config.log_path, PathBuf::from("logs_jeu.txt"));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = GameBuilder::new()
            .with_title("Test")
            .with_target_fps(144)
            .with_log_path("other.log");

        assert_eq!(builder.config.title, "Test");
        assert_eq!(builder.config.target_fps, 144);
        assert_eq!(builder.config.log_path, PathBuf::from("other.log"));
    }

    #[test]
    #[should_panic(expected = "Target FPS must be positive")]
    fn builder_with_target_fps_panics_on_zero() {
        GameBuilder::new().with_target_fps(0);
    }

    #[test]
    fn build_opens_the_journal() {
        let dir = tempfile::tempdir().unwrap();
        let game = quiet_game(&dir);

        assert!(game.logger().is_initialized());
        assert!(game.states().current().is_none());
    }

    //=====================================================================
    // Game Tests
    //=====================================================================

    #[test]
    fn start_installs_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = quiet_game(&dir);

        game.start();

        assert_eq!(game.states().current_kind(), Some(StateKind::Menu));
        assert!(!game.states().is_paused());
    }

    #[test]
    fn frame_ticks_clock_and_draws_overlay_last() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = quiet_game(&dir);
        game.start();

        let input = InputState::new();
        let mut canvas = DrawList::new();
        game.frame(&input, &Fixed(0.5, 60), &mut canvas);

        assert_eq!(game.clock().delta_time(), 0.5);
        assert_eq!(game.clock().fps(), 60);
        match canvas.commands().last() {
            Some(DrawCommand::Text { text, color, .. }) => {
                assert_eq!(text, "FPS: 60");
                assert_eq!(*color, Color::GREEN);
            }
            other => panic!("expected FPS text last, got {other:?}"),
        }
    }

    #[test]
    fn fps_overlay_hugs_right_edge() {
        let dir = tempfile::tempdir().unwrap();
        let game = quiet_game(&dir);
        let mut canvas = DrawList::new();

        game.draw_fps(&mut canvas);

        let width = canvas.measure_text("FPS: 0", 20);
        match &canvas.commands()[1] {
            DrawCommand::Text { x, y, .. } => {
                assert_eq!(*x, 1280 - width - 10);
                assert_eq!(*y, 10);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn fps_color_thresholds() {
        assert_eq!(fps_color(144), Color::GREEN);
        assert_eq!(fps_color(60), Color::GREEN);
        assert_eq!(fps_color(59), Color::YELLOW);
        assert_eq!(fps_color(30), Color::YELLOW);
        assert_eq!(fps_color(29), Color::RED);
        assert_eq!(fps_color(0), Color::RED);
    }

    //=====================================================================
    // Frame Flow Tests
    //=====================================================================

    const PLAY: (f32, f32) = (640.0, 440.0);
    const RESUME: (f32, f32) = (640.0, 320.0);
    const QUIT: (f32, f32) = (640.0, 400.0);

    fn click(at: (f32, f32)) -> InputState {
        let mut input = InputState::new();
        input.process_event(&InputEvent::MouseMoved { x: at.0, y: at.1 });
        input.process_event(&InputEvent::MouseButtonDown(MouseButton::Left));
        input
    }

    fn escape() -> InputState {
        let mut input = InputState::new();
        input.process_event(&InputEvent::KeyDown(KeyCode::Escape));
        input
    }

    fn step(game: &mut Game, input: &InputState, dt: f32) -> DrawList {
        let mut canvas = DrawList::new();
        game.frame(input, &Fixed(dt, 60), &mut canvas);
        canvas
    }

    fn current_address(game: &Game) -> Option<*const u8> {
        game.states()
            .current()
            .map(|state| state as *const dyn GameState as *const u8)
    }

    /// Menu → Game, 1.5s of play, Escape → Pause.
    fn paused_game(dir: &tempfile::TempDir) -> (Game, *const u8) {
        let mut game = quiet_game(dir);
        game.start();

        step(&mut game, &click(PLAY), 0.016);
        assert_eq!(game.states().current_kind(), Some(StateKind::Game));
        let playing = current_address(&game).unwrap();

        step(&mut game, &InputState::new(), 0.5);
        step(&mut game, &InputState::new(), 0.5);
        step(&mut game, &escape(), 0.5);

        (game, playing)
    }

    #[test]
    fn play_click_starts_a_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = quiet_game(&dir);
        game.start();

        let canvas = step(&mut game, &click(PLAY), 0.016);

        assert_eq!(game.states().current_kind(), Some(StateKind::Game));
        assert!(!game.states().has_saved_state());
        assert!(canvas.texts().any(|t| t == "GAME IN PROGRESS"));
    }

    #[test]
    fn escape_pauses_and_saves_the_game() {
        let dir = tempfile::tempdir().unwrap();
        let (game, _) = paused_game(&dir);

        assert_eq!(game.states().current_kind(), Some(StateKind::Pause));
        assert_eq!(game.states().saved_kind(), Some(StateKind::Game));
        assert!(game.states().is_paused());
    }

    #[test]
    fn resume_restores_the_same_game_with_its_timer_reset() {
        let dir = tempfile::tempdir().unwrap();
        let (mut game, playing) = paused_game(&dir);

        let canvas = step(&mut game, &click(RESUME), 0.016);

        assert_eq!(game.states().current_kind(), Some(StateKind::Game));
        assert_eq!(current_address(&game), Some(playing));
        assert!(!game.states().is_paused());
        assert!(!game.states().has_saved_state());
        assert!(canvas.texts().any(|t| t == "Play time: 0.0 seconds"));
    }

    #[test]
    fn escape_on_pause_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let (mut game, playing) = paused_game(&dir);

        step(&mut game, &escape(), 0.016);

        assert_eq!(current_address(&game), Some(playing));
        assert!(!game.states().is_paused());
    }

    #[test]
    fn quit_returns_to_menu_and_drops_the_game() {
        let dir = tempfile::tempdir().unwrap();
        let (mut game, _) = paused_game(&dir);

        let canvas = step(&mut game, &click(QUIT), 0.016);

        assert_eq!(game.states().current_kind(), Some(StateKind::Menu));
        assert!(!game.states().is_paused());
        assert!(!game.states().has_saved_state());
        assert!(canvas.texts().any(|t| t == "SKIRMISH RTS"));
    }

    #[test]
    fn shutdown_writes_banner() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = quiet_game(&dir);
        game.start();
        game.shutdown();

        let log = std::fs::read_to_string(dir.path().join("game.log")).unwrap();
        assert!(log.contains("=== GAME STARTUP ==="));
        assert!(log.contains("=== GAME SHUTDOWN ==="));
    }

    #[test]
    fn shutdown_closes_the_journal() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = quiet_game(&dir);
        game.start();
        game.shutdown();

        assert!(!game.logger().is_initialized());
        let log = std::fs::read_to_string(dir.path().join("game.log")).unwrap();
        let last = log.lines().last().unwrap();
        assert!(last.ends_with("Closing log"), "last line was {last:?}");
        let shutdown_at = log.find("=== GAME SHUTDOWN ===").unwrap();
        assert!(log.find("Closing log").unwrap() > shutdown_at);
    }
}
