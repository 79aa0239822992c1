//! Intro and game-over banners.

use crate::core::{EndReason, GameSummary};

pub const INTRO: &str = "
================= SONIC RUNNER =================
Robotnik has unleashed a swarm of Badniks! Help Sonic dash through
Green Hill Zone, grab rings, and avoid danger. Survive as long as
you can and rack up the highest score.

Controls: [w] up  [s] down  [d] spin dash  [Enter] stay  [q] quit
";

pub fn game_over(summary: &GameSummary) -> String {
    let flavour = match summary.reason {
        EndReason::OutOfLives => "Sonic ran out of rings and could not keep up...",
        EndReason::Quit => "Sonic called it a day.",
    };
    format!(
        "
================= GAME OVER =================
{flavour}
Final Score: {}
Rings Collected: {}
Turns Survived: {}
Thanks for playing!
",
        summary.score, summary.currency, summary.ticks
    )
}
