//! GameView: maps a `GameSnapshot` into the text frame.
//!
//! This module is pure (no I/O). Rendering the same snapshot twice produces the
//! same text.

use std::fmt::Write;

use crate::core::GameSnapshot;
use crate::types::{
    EMPTY_GLYPH, LANE_COUNT, LANE_GLYPHS, MAX_TRACK_WIDTH, RUNNER_DASH_GLYPH, RUNNER_GLYPH,
};

/// One lane row: the lane marker plus up to `MAX_TRACK_WIDTH` cells.
type Row = [char; MAX_TRACK_WIDTH as usize + 1];

/// Text renderer for the track and HUD.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current frame into an existing buffer.
    ///
    /// Callers can reuse one `String` across frames.
    pub fn render_into(&self, snap: &GameSnapshot, out: &mut String) {
        out.clear();
        self.hud_into(snap, out);
        out.push_str("\n\n");

        let width = (snap.track_width as usize).min(MAX_TRACK_WIDTH as usize);
        let mut rows: [Row; LANE_COUNT as usize] =
            [[EMPTY_GLYPH; MAX_TRACK_WIDTH as usize + 1]; LANE_COUNT as usize];
        for (lane, row) in rows.iter_mut().enumerate() {
            row[0] = LANE_GLYPHS[lane];
        }

        for entity in &snap.entities {
            let d = entity.distance as usize;
            if d < width && (entity.lane as usize) < rows.len() {
                rows[entity.lane as usize][d + 1] = entity.icon();
            }
        }

        let runner = if snap.player.dash_active {
            RUNNER_DASH_GLYPH
        } else {
            RUNNER_GLYPH
        };
        rows[snap.player.lane as usize][1] = runner;

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(&row[..=width]);
        }
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render(&self, snap: &GameSnapshot) -> String {
        let mut out = String::new();
        self.render_into(snap, &mut out);
        out
    }

    /// Status line: score, rings, lives, speed level, dash and shield.
    pub fn hud_into(&self, snap: &GameSnapshot, out: &mut String) {
        let p = &snap.player;
        let _ = write!(
            out,
            "Score: {:05}  Rings: {:02}  Lives: {}  Speed LVL: {}  Spin Dash: {}",
            p.score,
            p.currency,
            p.lives,
            snap.speed_level,
            p.dash_status().as_str()
        );
        if p.shielded() {
            out.push_str("  Shield: ON");
        }
    }
}
