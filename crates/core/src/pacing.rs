//! Pacing - tick delay and speed level, both derived from the tick counter.
//!
//! The two values are independent: the delay controls how long the loop
//! sleeps, the speed level is only displayed.

use std::time::Duration;

use crate::types::{BASE_DELAY_MS, DELAY_STEP_MS, MIN_DELAY_MS, SPEED_INTERVAL_TICKS};

/// Speed level shown in the HUD: `1 + tick / interval`.
pub fn speed_level(tick: u64) -> u64 {
    1 + tick / SPEED_INTERVAL_TICKS
}

/// Delay before the next tick, in milliseconds.
pub fn delay_ms(tick: u64) -> u64 {
    let steps = tick / SPEED_INTERVAL_TICKS;
    BASE_DELAY_MS
        .saturating_sub(steps.saturating_mul(DELAY_STEP_MS))
        .max(MIN_DELAY_MS)
}

pub fn delay(tick: u64) -> Duration {
    Duration::from_millis(delay_ms(tick))
}
