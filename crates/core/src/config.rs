//! Runner configuration.
//!
//! Everything defaults to the balance constants in `types`; a handful of values
//! can be overridden from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{
    HAZARD_ROLL_MAX, MAX_TRACK_WIDTH, MIN_TRACK_WIDTH, REWARD_ROLL_MAX, SPAWN_CHANCE, TRACK_WIDTH,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Seed for the spawn RNG.
    pub seed: u32,
    /// Cells per lane; entities spawn at `track_width - 1`.
    pub track_width: u16,
    pub spawn_chance: f64,
    pub reward_roll_max: f64,
    pub hazard_roll_max: f64,
    /// Skip the sleep between ticks.
    pub no_delay: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            track_width: TRACK_WIDTH,
            spawn_chance: SPAWN_CHANCE,
            reward_roll_max: REWARD_ROLL_MAX,
            hazard_roll_max: HAZARD_ROLL_MAX,
            no_delay: false,
        }
    }
}

impl RunnerConfig {
    /// Create from environment variables.
    ///
    /// - `SONIC_RUNNER_SEED`: RNG seed (default: derived from the clock)
    /// - `SONIC_RUNNER_TRACK_WIDTH`: track width, clamped to 4..=64
    /// - `SONIC_RUNNER_SPAWN_CHANCE`: spawn probability, clamped to 0..=1
    /// - `SONIC_RUNNER_NO_DELAY`: "1" or "true" disables pacing
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunnerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("SONIC_RUNNER_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let track_width = lookup("SONIC_RUNNER_TRACK_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(|w| w.clamp(MIN_TRACK_WIDTH, MAX_TRACK_WIDTH))
            .unwrap_or(defaults.track_width);

        let spawn_chance = lookup("SONIC_RUNNER_SPAWN_CHANCE")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 1.0))
            .unwrap_or(defaults.spawn_chance);

        let no_delay = lookup("SONIC_RUNNER_NO_DELAY")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            track_width,
            spawn_chance,
            no_delay,
            ..defaults
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_track_width(mut self, width: u16) -> Self {
        self.track_width = width.clamp(MIN_TRACK_WIDTH, MAX_TRACK_WIDTH);
        self
    }

    /// Distance at which new entities appear.
    pub fn spawn_distance(&self) -> u16 {
        self.track_width.saturating_sub(1)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
