//=========================================================================
// Frame Clock
//=========================================================================
//
// Per-frame delta-time, cumulative time and FPS.
//
// Architecture:
//   FrameTimer (host, Instant-based) ──TimeSource──> Clock::tick()
//
// The clock never measures time itself: it reads the last frame's
// duration and FPS from a `TimeSource`, which keeps it deterministic
// under test.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::{Duration, Instant};

//=== TimeSource ==========================================================

/// External provider of frame timing.
pub trait TimeSource {
    /// Seconds taken by the frame that was just rendered.
    fn frame_time(&self) -> f32;

    /// Frames per second, as measured by the source.
    fn fps(&self) -> u32;
}

//=== Clock ===============================================================

/// Frame timing state, mutated once per frame by [`tick`](Clock::tick).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clock {
    delta_time: f32,
    total_time: f32,
    fps: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads delta-time and FPS for the last frame and accumulates total time.
    ///
    /// Call exactly once per frame, before anything that consumes `dt`.
    pub fn tick(&mut self, source: &impl TimeSource) {
        self.delta_time = source.frame_time();
        self.total_time += self.delta_time;
        self.fps = source.fps();
    }

    /// Zeroes delta and total time. FPS is left as is.
    pub fn reset(&mut self) {
        self.delta_time = 0.0;
        self.total_time = 0.0;
    }

    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    #[inline]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FPS: {} | DeltaTime: {:.4}s | Total: {:.2}s",
            self.fps, self.delta_time, self.total_time
        )
    }
}

//=== FrameTimer ==========================================================

/// Wall-clock [`TimeSource`] used by the host loop.
///
/// `mark_frame` is called once at the start of each frame. FPS is the
/// number of frames completed during the last full second.
pub struct FrameTimer {
    last_frame: Instant,
    frame_time: f32,
    window_start: Instant,
    frames_in_window: u32,
    fps: u32,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            frame_time: 0.0,
            window_start: now,
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Records a frame boundary at the current instant.
    pub fn mark_frame(&mut self) {
        self.mark_frame_at(Instant::now());
    }

    /// Records a frame boundary at `now`.
    pub fn mark_frame_at(&mut self, now: Instant) {
        self.frame_time = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frames_in_window += 1;
        if now.saturating_duration_since(self.window_start) >= Duration::from_secs(1) {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start = now;
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for FrameTimer {
    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn fps(&self) -> u32 {
        self.fps
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
