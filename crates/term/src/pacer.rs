//! Sleep-based pacing between ticks.

use std::thread;
use std::time::Duration;

use crate::core::Pacer;

#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pace(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
