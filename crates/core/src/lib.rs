//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals or stdin, making it:
//!
//! - **Deterministic**: Same seed produces identical runs
//! - **Testable**: Every rule is exercised headless with scripted rolls and input
//! - **Portable**: The controller only talks to trait objects for I/O
//!
//! # Module Structure
//!
//! - [`entity`]: Rings, badniks and shields on the track
//! - [`player`]: The runner's lane, lives, rings, score, shield and dash
//! - [`rng`]: Injectable random source and a seedable LCG
//! - [`spawner`]: At most one spawn per tick
//! - [`mover`]: Scrolls entities toward the runner
//! - [`collision`]: Pickups and hits, with the hazard priority order
//! - [`pacing`]: Tick delay and speed level
//! - [`game_state`]: Ties the above into tick phases
//! - [`controller`]: Intro → Playing → GameOver loop over pluggable I/O
//!
//! # Game Rules
//!
//! - A badnik hit is resolved by the first that applies: active dash (+250),
//!   shield (no cost), rings (lose up to 10), life (lose one).
//! - A shield lasts 3 turns; picking up another resets it to 3.
//! - A used dash recharges on the next tick that is a multiple of 2.
//!
//! # Example
//!
//! ```
//! use sonic_runner_core::{Entity, GameState, RunnerConfig, ScriptedRng};
//! use sonic_runner_types::Command;
//!
//! let mut game = GameState::with_rng(RunnerConfig::default(), ScriptedRng::never_spawn());
//! let lane = game.player().lane;
//! game.insert_entity(Entity::hazard(lane, 1));
//!
//! game.advance_world();
//! assert_eq!(game.player().lives, 2);
//!
//! game.apply_command(Command::Up);
//! game.end_tick();
//! assert_eq!(game.player().lane, 0);
//! assert_eq!(game.tick(), 1);
//! ```

pub mod collision;
pub mod config;
pub mod controller;
pub mod entity;
pub mod game_state;
pub mod mover;
pub mod pacing;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use sonic_runner_types as types;

// Re-export commonly used types for convenience
pub use collision::{resolve_collisions, CollisionEvent, CollisionEvents};
pub use config::RunnerConfig;
pub use controller::{CommandSource, NoPacer, Notice, Pacer, Phase, Presenter, TurnController};
pub use entity::{Entities, Entity, MAX_ENTITIES};
pub use game_state::{CommandOutcome, GameState};
pub use player::{DashStatus, PlayerState};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::{EndReason, GameSnapshot, GameSummary};
pub use spawner::roll_spawn;
