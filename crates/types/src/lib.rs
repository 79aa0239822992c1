//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Track Dimensions
//!
//! - **Lanes**: 3 parallel lanes (indexed 0-2), the runner starts in lane 1
//! - **Width**: 24 cells; entities spawn at distance 23 and scroll toward distance 0
//!
//! # Balance Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_CHANCE` | 0.55 | Probability that one entity spawns in a tick |
//! | `REWARD_ROLL_MAX` | 0.6 | Kind rolls below this spawn a ring |
//! | `HAZARD_ROLL_MAX` | 0.9 | Kind rolls below this (and above the ring range) spawn a badnik |
//! | `REWARD_VALUE` | 100 | Points per ring |
//! | `HAZARD_DAMAGE` | 1 | Lives lost to an unprotected hit |
//! | `SHIELD_TURNS` | 3 | Turns a shield lasts |
//! | `DASH_DESTROY_BONUS` | 250 | Points for dashing through a badnik |
//! | `CURRENCY_LOSS_CAP` | 10 | Most rings a single hit can cost |
//! | `DASH_COOLDOWN_TICKS` | 2 | Dash recharges on ticks that are a multiple of this |
//!
//! # Pacing
//!
//! The delay between ticks starts at `BASE_DELAY_MS` and drops by `DELAY_STEP_MS`
//! every `SPEED_INTERVAL_TICKS` ticks, floored at `MIN_DELAY_MS`.
//!
//! # Examples
//!
//! ```
//! use sonic_runner_types::{Command, Direction, EntityKind, LANE_COUNT};
//!
//! // Parse a typed command (case-insensitive)
//! assert_eq!(Command::from_str("W"), Command::Up);
//! assert_eq!(Command::from_str("jump"), Command::Stay);
//!
//! // Directions move one lane at a time
//! assert_eq!(Direction::Up.delta(), -1);
//!
//! // Every entity kind has a glyph
//! assert_eq!(EntityKind::Reward.icon(), '○');
//!
//! assert_eq!(LANE_COUNT, 3);
//! ```

/// Number of lanes on the track.
pub const LANE_COUNT: u8 = 3;

/// Lane the runner starts in (the middle one).
pub const START_LANE: u8 = 1;

/// Default track width in cells. Entities spawn at `TRACK_WIDTH - 1`.
pub const TRACK_WIDTH: u16 = 24;

/// Narrowest configurable track.
pub const MIN_TRACK_WIDTH: u16 = 4;

/// Widest configurable track. Also bounds the number of live entities.
pub const MAX_TRACK_WIDTH: u16 = 64;

/// Probability that an entity spawns in a given tick.
pub const SPAWN_CHANCE: f64 = 0.55;

/// Kind rolls in `[0, REWARD_ROLL_MAX)` spawn a ring.
pub const REWARD_ROLL_MAX: f64 = 0.6;

/// Kind rolls in `[REWARD_ROLL_MAX, HAZARD_ROLL_MAX)` spawn a badnik; the rest spawn a shield.
pub const HAZARD_ROLL_MAX: f64 = 0.9;

/// Points awarded for a ring.
pub const REWARD_VALUE: u32 = 100;

/// Lives lost to a badnik when nothing else absorbs the hit.
pub const HAZARD_DAMAGE: u32 = 1;

/// Lives at the start of a run.
pub const STARTING_LIVES: u32 = 3;

/// Turns of invulnerability granted by a shield pickup.
pub const SHIELD_TURNS: u32 = 3;

/// Bonus points for destroying a badnik with an active dash.
pub const DASH_DESTROY_BONUS: u32 = 250;

/// Most rings a single badnik hit can cost.
pub const CURRENCY_LOSS_CAP: u32 = 10;

/// Dash recharges on the first tick that is a multiple of this value.
pub const DASH_COOLDOWN_TICKS: u64 = 2;

/// Ticks per speed level (and per pacing step).
pub const SPEED_INTERVAL_TICKS: u64 = 8;

/// Delay between ticks at the start of a run.
pub const BASE_DELAY_MS: u64 = 600;

/// Amount the delay shrinks every `SPEED_INTERVAL_TICKS` ticks.
pub const DELAY_STEP_MS: u64 = 50;

/// Pacing floor.
pub const MIN_DELAY_MS: u64 = 200;

/// Pause after a rejected dash so the notice can be read.
pub const DASH_REJECT_PAUSE_MS: u64 = 500;

/// Empty track cell.
pub const EMPTY_GLYPH: char = '·';

/// Runner glyph.
pub const RUNNER_GLYPH: char = '🐿';

/// Runner glyph while a dash is active.
pub const RUNNER_DASH_GLYPH: char = '🌀';

/// Lane markers drawn at the start of each row (top to bottom).
pub const LANE_GLYPHS: [char; LANE_COUNT as usize] = ['☁', '=', '☘'];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_partition_is_ordered() {
        assert!(REWARD_ROLL_MAX > 0.0);
        assert!(REWARD_ROLL_MAX < HAZARD_ROLL_MAX);
        assert!(HAZARD_ROLL_MAX < 1.0);
    }

    #[test]
    fn default_track_width_is_configurable_range() {
        assert!((MIN_TRACK_WIDTH..=MAX_TRACK_WIDTH).contains(&TRACK_WIDTH));
    }

    #[test]
    fn pacing_floor_is_reachable() {
        assert!(MIN_DELAY_MS < BASE_DELAY_MS);
        assert_eq!((BASE_DELAY_MS - MIN_DELAY_MS) % DELAY_STEP_MS, 0);
    }

    #[test]
    fn command_parsing_is_total() {
        assert_eq!(Command::from_str(""), Command::Stay);
        assert_eq!(Command::from_str("  s \n"), Command::Down);
        assert_eq!(Command::from_str("DASH"), Command::Dash);
        assert_eq!(Command::from_str("q"), Command::Quit);
        assert_eq!(Command::from_str("x"), Command::Stay);
    }

    #[test]
    fn icons_are_distinct() {
        let icons = [
            EntityKind::Reward.icon(),
            EntityKind::Hazard.icon(),
            EntityKind::Shield.icon(),
        ];
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
        assert_ne!(icons[0], icons[2]);
        assert!(!icons.contains(&EMPTY_GLYPH));
    }
}

/// What a spawned entity is.
///
/// - **Reward**: a ring, worth currency and points
/// - **Hazard**: a badnik, costs a life unless something absorbs the hit
/// - **Shield**: grants a few turns of invulnerability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Reward,
    Hazard,
    Shield,
}

impl EntityKind {
    /// Display glyph for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use sonic_runner_types::EntityKind;
    ///
    /// assert_eq!(EntityKind::Hazard.icon(), '✖');
    /// assert_eq!(EntityKind::Shield.icon(), '★');
    /// ```
    pub fn icon(&self) -> char {
        match self {
            EntityKind::Reward => '○',
            EntityKind::Hazard => '✖',
            EntityKind::Shield => '★',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Reward => "ring",
            EntityKind::Hazard => "badnik",
            EntityKind::Shield => "shield",
        }
    }
}

/// Lane change direction. Lane 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Signed lane offset.
    pub fn delta(&self) -> i8 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Player commands read once per tick.
///
/// The set is closed: anything unrecognised is `Stay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one lane up
    Up,
    /// Move one lane down
    Down,
    /// Spin dash for the rest of this tick
    Dash,
    /// Keep the current lane
    Stay,
    /// End the run
    Quit,
}

impl Command {
    /// Parse a typed literal (trimmed, case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use sonic_runner_types::Command;
    ///
    /// assert_eq!(Command::from_str("w"), Command::Up);
    /// assert_eq!(Command::from_str("down"), Command::Down);
    /// assert_eq!(Command::from_str("d"), Command::Dash);
    /// assert_eq!(Command::from_str(""), Command::Stay);
    /// assert_eq!(Command::from_str("Q"), Command::Quit);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "w" | "up" => Command::Up,
            "s" | "down" => Command::Down,
            "d" | "dash" => Command::Dash,
            "q" | "quit" => Command::Quit,
            _ => Command::Stay,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Dash => "dash",
            Command::Stay => "stay",
            Command::Quit => "quit",
        }
    }

    /// Lane change requested by this command, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            _ => None,
        }
    }
}
