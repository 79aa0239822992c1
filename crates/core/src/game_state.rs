//! Game state module - the runner, the track and the tick counter
//!
//! This module ties together the simulation pieces: spawner, mover, collision
//! resolver and the runner's resources. It exposes the tick phases separately
//! so the turn controller can interleave rendering and input between them.

use std::time::Duration;

use crate::collision::{self, CollisionEvents};
use crate::config::RunnerConfig;
use crate::entity::{Entities, Entity};
use crate::pacing;
use crate::player::PlayerState;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{EndReason, GameSnapshot, GameSummary};
use crate::spawner;
use crate::types::Command;

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Moved,
    Stayed,
    DashStarted,
    /// Dash requested while recharging; nothing changed.
    DashRejected,
    Quit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: RunnerConfig,
    rng: R,
    player: PlayerState,
    entities: Entities,
    /// Completed ticks.
    tick: u64,
    /// Collisions resolved in the current tick.
    last_events: CollisionEvents,
}

impl GameState<SimpleRng> {
    /// Create a new game seeded from the config.
    pub fn new(config: RunnerConfig) -> Self {
        let rng = SimpleRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing spawn rolls from `rng`.
    pub fn with_rng(config: RunnerConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            player: PlayerState::default(),
            entities: Entities::new(),
            tick: 0,
            last_events: CollisionEvents::new(),
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Direct access for setting up scenarios.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Place an entity on the track. Returns false when the track is full.
    pub fn insert_entity(&mut self, entity: Entity) -> bool {
        self.entities.try_push(entity).is_ok()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn last_events(&self) -> &CollisionEvents {
        &self.last_events
    }

    pub fn speed_level(&self) -> u64 {
        pacing::speed_level(self.tick)
    }

    /// Delay before the next tick.
    pub fn delay(&self) -> Duration {
        pacing::delay(self.tick)
    }

    pub fn game_over(&self) -> bool {
        !self.player.is_alive()
    }

    /// Roll for a new entity and place it at the far end of the track.
    pub fn spawn(&mut self) -> Option<Entity> {
        let entity = spawner::roll_spawn(&mut self.rng, &self.config)?;
        if self.entities.try_push(entity).is_err() {
            log::warn!("track full, dropping spawned {}", entity.kind.as_str());
            return None;
        }
        log::debug!(
            "tick {}: spawned {} in lane {}",
            self.tick,
            entity.kind.as_str(),
            entity.lane
        );
        Some(entity)
    }

    /// Scroll everything one step. Returns the number of missed entities.
    pub fn move_entities(&mut self) -> usize {
        crate::mover::advance(&mut self.entities)
    }

    /// Resolve whatever reached the runner this tick.
    pub fn resolve_collisions(&mut self) -> &CollisionEvents {
        self.last_events = collision::resolve_collisions(&mut self.player, &mut self.entities);
        for event in &self.last_events {
            log::debug!("tick {}: {:?}", self.tick, event);
        }
        &self.last_events
    }

    /// Spawn, move and resolve collisions, in that order.
    ///
    /// Moving before resolving lets an entity that reaches distance 0 this
    /// tick collide in the same tick.
    pub fn advance_world(&mut self) {
        self.spawn();
        self.move_entities();
        self.resolve_collisions();
    }

    /// Apply the player's command for this tick.
    pub fn apply_command(&mut self, command: Command) -> CommandOutcome {
        log::trace!("tick {}: command {}", self.tick, command.as_str());
        match command {
            Command::Up | Command::Down => {
                if let Some(direction) = command.direction() {
                    self.player.move_lane(direction);
                }
                CommandOutcome::Moved
            }
            Command::Dash => {
                if self.player.activate_dash() {
                    CommandOutcome::DashStarted
                } else {
                    CommandOutcome::DashRejected
                }
            }
            Command::Stay => CommandOutcome::Stayed,
            Command::Quit => CommandOutcome::Quit,
        }
    }

    /// End-of-tick housekeeping: dash recharge check, shield and dash timers,
    /// then advance the tick counter.
    pub fn end_tick(&mut self) {
        self.player.recharge_dash(self.tick);
        self.player.end_turn();
        self.tick += 1;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player: self.player,
            entities: self.entities.clone(),
            tick: self.tick,
            speed_level: self.speed_level(),
            track_width: self.config.track_width,
            game_over: self.game_over(),
        }
    }

    pub fn summary(&self, reason: EndReason) -> GameSummary {
        GameSummary {
            score: self.player.score,
            currency: self.player.currency,
            ticks: self.tick,
            reason,
        }
    }
}
