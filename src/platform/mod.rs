//=========================================================================
// Platform Subsystem
//
// Hosts the game in a Winit window on the main thread.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────┐
//  │  Winit Event Loop                        │
//  │   ↓                                      │
//  │  input_processor (Winit → InputEvent)    │
//  │   ↓                                      │
//  │  InputState (held keys + edges)          │
//  │   ↓                                      │
//  │  RedrawRequested = frame boundary        │
//  │   ├─ FrameTimer::mark_frame()            │
//  │   ├─ Game::frame(input, timer, raster)   │
//  │   ├─ InputState::end_frame()             │
//  │   └─ softbuffer present                  │
//  │   ↓                                      │
//  │  about_to_wait → WaitUntil(next frame)   │
//  └──────────────────────────────────────────┘
// ```
//
// Input is applied to `InputState` as it arrives, so edges raised
// between two redraws are visible to exactly one frame.
//
// Each frame is rasterized on the CPU into a pixel buffer sized to the
// window's physical size, then copied to the softbuffer surface. The
// window title mirrors the active state and the measured FPS.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod raster;

//=== External Crates =====================================================

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ab_glyph::FontRef;
use log::*;
use softbuffer::{Context, Surface};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::clock::FrameTimer;
use crate::core::input::InputState;
use crate::engine::Game;

use raster::Raster;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop or a surface the game cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    #[error("Window creation failed: {0}")]
    WindowCreation(#[source] winit::error::OsError),

    /// Surface creation, resize or present failed.
    #[error("Drawing surface error: {0}")]
    Surface(#[source] softbuffer::SoftBufferError),

    #[error("UI font could not be loaded: {0}")]
    Font(#[source] ab_glyph::InvalidFont),
}

//=== Platform ============================================================

type WindowSurface = Surface<Rc<Window>, Rc<Window>>;

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(&mut game)` loads the UI font
/// 2. **Execution**: `platform.run()` blocks until the window closes
/// 3. **Frames**: one `Game::frame` per `RedrawRequested`, presented
/// 4. **Shutdown**: close request or fatal error → `event_loop.exit()`
pub(crate) struct Platform<'g> {
    game: &'g mut Game,

    /// OS window handle (None until `resumed()` called).
    window: Option<Rc<Window>>,
    surface: Option<WindowSurface>,

    //--- Frame Buffer ------------------------------------------------------
    pixels: Vec<u32>,
    size: PhysicalSize<u32>,
    scale: f32,
    font: FontRef<'static>,

    input: InputState,
    timer: FrameTimer,

    frame_interval: Duration,
    next_frame: Instant,
    title: String,

    /// First fatal error; returned from `run`.
    failure: Option<PlatformError>,
}

impl<'g> Platform<'g> {
    //--- Construction -----------------------------------------------------

    /// # Errors
    ///
    /// Returns [`PlatformError::Font`] if the embedded font is unreadable.
    pub fn new(game: &'g mut Game) -> Result<Self, PlatformError> {
        let font = raster::ui_font().map_err(PlatformError::Font)?;
        let frame_interval = Duration::from_nanos(1_000_000_000 / u64::from(game.config().target_fps));
        let size = PhysicalSize::new(game.config().width, game.config().height);
        info!(
            target: "platform",
            "Platform initialized (frame interval {:.2}ms)",
            frame_interval.as_secs_f64() * 1000.0
        );

        Ok(Self {
            game,
            window: None,
            surface: None,
            pixels: vec![0; size.width as usize * size.height as usize],
            size,
            scale: 1.0,
            font,
            input: InputState::new(),
            timer: FrameTimer::new(),
            frame_interval,
            next_frame: Instant::now(),
            title: String::new(),
            failure: None,
        })
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created, fails
    /// while running, or the window/surface could not be set up or drawn.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// One frame: measure, tick/update/draw, clear input edges, present.
    fn run_frame(&mut self) -> Result<(), PlatformError> {
        self.timer.mark_frame();

        let mut raster = Raster::new(
            &mut self.pixels,
            self.size.width,
            self.size.height,
            self.scale,
            &self.font,
        );
        self.game.frame(&self.input, &self.timer, &mut raster);
        self.input.end_frame();

        self.present()?;
        self.refresh_title();
        Ok(())
    }

    /// Copies the frame buffer to the window. No-op before `resumed`.
    fn present(&mut self) -> Result<(), PlatformError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        let mut buffer = surface.buffer_mut().map_err(PlatformError::Surface)?;
        let len = buffer.len().min(self.pixels.len());
        buffer[..len].copy_from_slice(&self.pixels[..len]);
        buffer.present().map_err(PlatformError::Surface)
    }

    /// Matches the frame buffer (and surface, if any) to `size`.
    fn resize_frame(&mut self, size: PhysicalSize<u32>) -> Result<(), PlatformError> {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            // Minimized; keep the last buffer.
            return Ok(());
        };

        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height).map_err(PlatformError::Surface)?;
        }

        self.size = size;
        self.scale = size.width as f32 / self.game.config().width as f32;
        self.pixels.resize(size.width as usize * size.height as usize, 0);

        debug!(
            target: "platform",
            "Frame buffer {}x{} (scale {:.2})",
            size.width, size.height, self.scale
        );
        Ok(())
    }

    /// Creates the softbuffer surface for `window`.
    fn attach(&mut self, window: Rc<Window>) -> Result<(), PlatformError> {
        let context = Context::new(Rc::clone(&window)).map_err(PlatformError::Surface)?;
        let surface = Surface::new(&context, Rc::clone(&window)).map_err(PlatformError::Surface)?;

        self.surface = Some(surface);
        self.resize_frame(window.inner_size())?;
        self.window = Some(window);
        Ok(())
    }

    /// Records a fatal error and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        self.game.logger().error(&err.to_string());
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn refresh_title(&mut self) {
        let state = self
            .game
            .states()
            .current_kind()
            .map_or("None", |kind| kind.name());
        let title = format!(
            "{} | {} | {} FPS",
            self.game.config().title,
            state,
            self.game.clock().fps()
        );

        if title != self.title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform<'_> {
    /// Creates the window and its surface on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let config = self.game.config();
        let attrs = WindowAttributes::default()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(e) => return self.fail(event_loop, PlatformError::WindowCreation(e)),
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        if let Err(e) = self.attach(Rc::clone(&window)) {
            return self.fail(event_loop, e);
        }

        window.request_redraw();
        self.next_frame = Instant::now() + self.frame_interval;
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.game.logger().info("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Err(e) = self.resize_frame(*size) {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |window| window.scale_factor());
                let event = input_processor::process_cursor_move(*position, scale);
                self.input.process_event(&event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.repeat {
                    return;
                }
                match input_processor::process_key_event(key_event) {
                    Some(event) => self.input.process_event(&event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = input_processor::process_mouse_button(*button, *state);
                self.input.process_event(&event);
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.run_frame() {
                    self.fail(event_loop, e);
                }
            }

            _ => {
                // Focused, Moved, etc. are not needed.
            }
        }
    }

    /// Schedules the next redraw at the target frame rate.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame += self.frame_interval;
            // Skip missed slots rather than bursting to catch up.
            if self.next_frame < now {
                self.next_frame = now + self.frame_interval;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
