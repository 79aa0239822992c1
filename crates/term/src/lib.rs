//! Terminal presentation module.
//!
//! This is the small I/O layer around the simulation: a pure text view of the
//! track, the intro/game-over banners, a crossterm-backed presenter and a
//! sleep-based pacer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from a snapshot only, so a frame is a pure function of state
//! - Degrade to plain text when stdout is not a terminal

pub mod banner;
pub mod game_view;
pub mod pacer;
pub mod renderer;

pub use sonic_runner_core as core;
pub use sonic_runner_types as types;

pub use game_view::GameView;
pub use pacer::SleepPacer;
pub use renderer::TerminalRenderer;
