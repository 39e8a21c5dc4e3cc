//=========================================================================
// Skirmish: Library Root
//
// Phase one skeleton of a real-time strategy game: a frame loop, a
// three-state machine (menu, game, pause), a frame clock and a journal.
//
// Responsibilities:
// - Expose the game facade (`Game`, `GameBuilder`)
// - Expose `core` and `states` for tests and later phases
// - Keep the Winit host (`platform`) out of the public API
//
// Typical usage:
// ```no_run
// use skirmish::GameBuilder;
//
// fn main() -> Result<(), skirmish::PlatformError> {
//     GameBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the loop's building blocks (logger, clock, input, canvas,
// state machine). `states` holds the concrete menu, game and pause modes.
//
pub mod core;
pub mod prelude;
pub mod states;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and event loop. `engine` wires config,
// journal, clock and state manager together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Game, GameBuilder, GameConfig};
pub use platform::PlatformError;
