//! Runner state: lane, lives, rings, score, shield timer and spin dash.

use crate::types::{Direction, DASH_COOLDOWN_TICKS, LANE_COUNT, START_LANE, STARTING_LIVES};

/// Spin dash status as shown in the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashStatus {
    Ready,
    Active,
    Recharging,
}

impl DashStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashStatus::Ready => "READY",
            DashStatus::Active => "ACTIVE",
            DashStatus::Recharging => "RECHARGE",
        }
    }
}

/// The controlled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub lane: u8,
    pub lives: u32,
    /// Rings held.
    pub currency: u32,
    pub score: u32,
    pub shield_turns: u32,
    pub dash_ready: bool,
    /// Set for the remainder of the tick in which the dash was activated.
    pub dash_active: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            lane: START_LANE,
            lives: STARTING_LIVES,
            currency: 0,
            score: 0,
            shield_turns: 0,
            dash_ready: true,
            dash_active: false,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one lane, clamped to the track. A move past the edge is a no-op.
    pub fn move_lane(&mut self, direction: Direction) {
        let max = (LANE_COUNT - 1) as i8;
        let lane = (self.lane as i8 + direction.delta()).clamp(0, max);
        self.lane = lane as u8;
    }

    /// Start a spin dash. Returns false and changes nothing while recharging.
    pub fn activate_dash(&mut self) -> bool {
        if !self.dash_ready {
            return false;
        }
        self.dash_ready = false;
        self.dash_active = true;
        true
    }

    /// Tick-aligned recharge: a spent dash comes back on the first tick that is
    /// a multiple of the cooldown, regardless of when it was used.
    pub fn recharge_dash(&mut self, tick: u64) {
        if !self.dash_ready && !self.dash_active && tick % DASH_COOLDOWN_TICKS == 0 {
            self.dash_ready = true;
        }
    }

    /// End-of-tick housekeeping. Runs exactly once per completed tick.
    pub fn end_turn(&mut self) {
        self.shield_turns = self.shield_turns.saturating_sub(1);
        self.dash_active = false;
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn shielded(&self) -> bool {
        self.shield_turns > 0
    }

    pub fn dash_status(&self) -> DashStatus {
        if self.dash_ready {
            DashStatus::Ready
        } else if self.dash_active {
            DashStatus::Active
        } else {
            DashStatus::Recharging
        }
    }
}
