use crate::entity::Entities;
use crate::player::PlayerState;

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub player: PlayerState,
    pub entities: Entities,
    pub tick: u64,
    pub speed_level: u64,
    pub track_width: u16,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    OutOfLives,
    Quit,
}

/// Final tally reported once when the run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSummary {
    pub score: u32,
    pub currency: u32,
    /// Ticks fully completed.
    ///
    /// A tick that ends the run on a fatal hit is rendered but not counted,
    /// and no input is read for it.
    pub ticks: u64,
    pub reason: EndReason,
}
