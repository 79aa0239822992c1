//! RNG module - injectable random source for spawn rolls
//!
//! The simulation never touches a global generator. Every roll goes through a
//! [`RandomSource`] owned by the game state, so a seed fully determines a run
//! and tests can script exact rolls.
//!
//! Also provides a simple LCG used by the binary and by deterministic tests.

/// Source of the uniform draws the spawner consumes.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, max)`. `max` must be non-zero.
    fn next_below(&mut self, max: u32) -> u32 {
        let v = (self.next_f64() * max as f64) as u32;
        v.min(max.saturating_sub(1))
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (replaying from it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Scales the high bits; the low bits of an LCG cycle with a short period.
    fn next_below(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of unit draws, then repeats the last one.
///
/// Handy for pinning down spawn decisions in tests and benchmarks.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(rolls: impl Into<Vec<f64>>) -> Self {
        Self {
            rolls: rolls.into(),
            next: 0,
        }
    }

    /// A source that never spawns anything.
    pub fn never_spawn() -> Self {
        Self::new(vec![0.999])
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len().saturating_sub(self.next)
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        let v = match self.rolls.get(self.next) {
            Some(v) => *v,
            None => self.rolls.last().copied().unwrap_or(0.999),
        };
        self.next += 1;
        v.clamp(0.0, 0.999_999)
    }
}
