//! Terminal runner (default binary).
//!
//! One tick per typed line: the frame is printed, a command is read from stdin,
//! and the loop sleeps before the next tick. Set `RUST_LOG=debug` to trace
//! spawns and collisions on stderr.

use anyhow::Result;

use sonic_runner::core::{GameState, NoPacer, Pacer, RunnerConfig, TurnController};
use sonic_runner::input::LineReader;
use sonic_runner::term::{SleepPacer, TerminalRenderer};

fn main() -> Result<()> {
    env_logger::init();

    let config = RunnerConfig::from_env();
    log::info!(
        "seed {}, track width {}, spawn chance {}",
        config.seed,
        config.track_width,
        config.spawn_chance
    );

    let mut pacer: Box<dyn Pacer> = if config.no_delay {
        Box::new(NoPacer)
    } else {
        Box::new(SleepPacer)
    };
    let controller = TurnController::new(GameState::new(config));
    let mut input = LineReader::stdin();
    let mut presenter = TerminalRenderer::new();

    let summary = controller.run(&mut input, &mut presenter, pacer.as_mut())?;
    log::info!(
        "final score {}, rings {}, ticks {}",
        summary.score,
        summary.currency,
        summary.ticks
    );
    Ok(())
}
