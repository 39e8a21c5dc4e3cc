//=========================================================================
// Skirmish: Entry Point
//=========================================================================
//
// Diagnostics from `log` go through env_logger (RUST_LOG, default
// "info"); the game journal goes to `logs_jeu.txt`.
//
//=========================================================================

use anyhow::Context;
use skirmish::GameBuilder;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let game = GameBuilder::new().build();
    game.run().context("game loop terminated abnormally")?;

    Ok(())
}
