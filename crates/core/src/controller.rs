//! Turn controller - drives one run from the intro banner to the summary.
//!
//! The controller is single-threaded and synchronous. Reading a command and
//! pacing are the only blocking points, and both go through the collaborator
//! traits below so a run can be replayed headless.
//!
//! Per tick: spawn, move, resolve collisions, render, read input, apply input,
//! recharge check, end of turn, advance tick, pace.

use std::io;
use std::time::Duration;

use crate::game_state::{CommandOutcome, GameState};
use crate::rng::RandomSource;
use crate::snapshot::{EndReason, GameSnapshot, GameSummary};
use crate::types::{Command, DASH_REJECT_PAUSE_MS};

/// Blocking source of player commands.
pub trait CommandSource {
    /// Wait for the next command. End of input is `Command::Quit`.
    fn next_command(&mut self) -> Command;

    /// Wait for the player to acknowledge the intro. False on end of input.
    fn acknowledge(&mut self) -> bool;
}

/// Transient messages shown between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DashRecharging,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::DashRecharging => "Spin dash is recharging!",
        }
    }
}

/// Output side of a run.
pub trait Presenter {
    fn intro(&mut self) -> io::Result<()>;
    fn frame(&mut self, snapshot: &GameSnapshot) -> io::Result<()>;
    fn notice(&mut self, notice: Notice) -> io::Result<()>;
    fn game_over(&mut self, summary: &GameSummary) -> io::Result<()>;
}

/// Waits between ticks.
pub trait Pacer {
    fn pace(&mut self, delay: Duration);
}

/// Pacer that never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pace(&mut self, _delay: Duration) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Intro,
    Playing,
    GameOver,
}

pub struct TurnController<R: RandomSource> {
    game: GameState<R>,
    phase: Phase,
    end_reason: EndReason,
}

impl<R: RandomSource> TurnController<R> {
    pub fn new(game: GameState<R>) -> Self {
        Self {
            game,
            phase: Phase::Intro,
            end_reason: EndReason::OutOfLives,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    /// Run to completion and report the summary exactly once.
    pub fn run<S, P, T>(
        mut self,
        source: &mut S,
        presenter: &mut P,
        pacer: &mut T,
    ) -> io::Result<GameSummary>
    where
        S: CommandSource + ?Sized,
        P: Presenter + ?Sized,
        T: Pacer + ?Sized,
    {
        self.start(source, presenter)?;
        while self.phase == Phase::Playing {
            self.step(source, presenter, pacer)?;
        }
        self.finish(presenter)
    }

    /// Show the intro and wait for acknowledgment.
    pub fn start<S, P>(&mut self, source: &mut S, presenter: &mut P) -> io::Result<Phase>
    where
        S: CommandSource + ?Sized,
        P: Presenter + ?Sized,
    {
        if self.phase != Phase::Intro {
            return Ok(self.phase);
        }
        presenter.intro()?;
        if source.acknowledge() {
            log::info!("run started (seed {})", self.game.config().seed);
            self.phase = Phase::Playing;
        } else {
            self.end(EndReason::Quit);
        }
        Ok(self.phase)
    }

    /// Play one tick. Does nothing unless the run is in progress.
    pub fn step<S, P, T>(
        &mut self,
        source: &mut S,
        presenter: &mut P,
        pacer: &mut T,
    ) -> io::Result<Phase>
    where
        S: CommandSource + ?Sized,
        P: Presenter + ?Sized,
        T: Pacer + ?Sized,
    {
        if self.phase != Phase::Playing {
            return Ok(self.phase);
        }

        self.game.advance_world();
        presenter.frame(&self.game.snapshot())?;

        // The fatal tick reads no input and does not advance the tick count.
        if self.game.game_over() {
            self.end(EndReason::OutOfLives);
            return Ok(self.phase);
        }

        match self.game.apply_command(source.next_command()) {
            CommandOutcome::Quit => {
                // No housekeeping for the abandoned tick.
                self.end(EndReason::Quit);
                return Ok(self.phase);
            }
            CommandOutcome::DashRejected => {
                presenter.notice(Notice::DashRecharging)?;
                pacer.pace(Duration::from_millis(DASH_REJECT_PAUSE_MS));
            }
            CommandOutcome::Moved | CommandOutcome::Stayed | CommandOutcome::DashStarted => {}
        }

        self.game.end_tick();
        pacer.pace(self.game.delay());
        Ok(self.phase)
    }

    /// Show and return the final summary. Consumes the controller.
    pub fn finish<P>(mut self, presenter: &mut P) -> io::Result<GameSummary>
    where
        P: Presenter + ?Sized,
    {
        if self.phase != Phase::GameOver {
            self.end(EndReason::Quit);
        }
        let summary = self.game.summary(self.end_reason);
        presenter.game_over(&summary)?;
        Ok(summary)
    }

    fn end(&mut self, reason: EndReason) {
        log::info!(
            "run over at tick {} ({:?}): score {}, rings {}",
            self.game.tick(),
            reason,
            self.game.player().score,
            self.game.player().currency
        );
        self.end_reason = reason;
        self.phase = Phase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;
    use crate::entity::Entity;
    use crate::rng::ScriptedRng;
    use std::collections::VecDeque;

    struct Script {
        ack: bool,
        commands: VecDeque<Command>,
    }

    impl Script {
        fn new(commands: &[Command]) -> Self {
            Self {
                ack: true,
                commands: commands.iter().copied().collect(),
            }
        }
    }

    impl CommandSource for Script {
        fn next_command(&mut self) -> Command {
            self.commands.pop_front().unwrap_or(Command::Quit)
        }

        fn acknowledge(&mut self) -> bool {
            self.ack
        }
    }

    #[derive(Default)]
    struct Recorder {
        intros: usize,
        frames: Vec<GameSnapshot>,
        notices: Vec<Notice>,
        summaries: Vec<GameSummary>,
    }

    impl Presenter for Recorder {
        fn intro(&mut self) -> io::Result<()> {
            self.intros += 1;
            Ok(())
        }

        fn frame(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
            self.frames.push(snapshot.clone());
            Ok(())
        }

        fn notice(&mut self, notice: Notice) -> io::Result<()> {
            self.notices.push(notice);
            Ok(())
        }

        fn game_over(&mut self, summary: &GameSummary) -> io::Result<()> {
            self.summaries.push(*summary);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Delays(Vec<Duration>);

    impl Pacer for Delays {
        fn pace(&mut self, delay: Duration) {
            self.0.push(delay);
        }
    }

    fn quiet_controller() -> TurnController<ScriptedRng> {
        TurnController::new(GameState::with_rng(
            RunnerConfig::default(),
            ScriptedRng::never_spawn(),
        ))
    }

    #[test]
    fn quit_ends_without_housekeeping() {
        let mut source = Script::new(&[Command::Stay, Command::Quit]);
        let mut out = Recorder::default();
        let mut pacer = Delays::default();

        let summary = quiet_controller()
            .run(&mut source, &mut out, &mut pacer)
            .unwrap();

        assert_eq!(out.intros, 1);
        assert_eq!(out.frames.len(), 2);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.reason, EndReason::Quit);
        assert_eq!(pacer.0, vec![Duration::from_millis(600)]);
        assert_eq!(out.summaries.len(), 1);
    }

    #[test]
    fn end_of_input_at_intro_skips_play() {
        let mut source = Script::new(&[]);
        source.ack = false;
        let mut out = Recorder::default();

        let summary = quiet_controller()
            .run(&mut source, &mut out, &mut NoPacer)
            .unwrap();

        assert!(out.frames.is_empty());
        assert_eq!(summary.ticks, 0);
        assert_eq!(out.summaries.len(), 1);
    }

    #[test]
    fn rejected_dash_shows_notice_and_keeps_playing() {
        let mut source = Script::new(&[Command::Dash, Command::Dash, Command::Quit]);
        let mut out = Recorder::default();
        let mut pacer = Delays::default();

        let summary = quiet_controller()
            .run(&mut source, &mut out, &mut pacer)
            .unwrap();

        assert_eq!(out.notices, vec![Notice::DashRecharging]);
        assert_eq!(summary.ticks, 2);
        assert_eq!(
            pacer.0,
            vec![
                Duration::from_millis(600),
                Duration::from_millis(500),
                Duration::from_millis(600),
            ]
        );
    }

    #[test]
    fn losing_last_life_stops_after_render() {
        let mut controller = quiet_controller();
        controller.game.player_mut().lives = 1;
        let lane = controller.game.player().lane;
        controller.game.insert_entity(Entity::hazard(lane, 1));

        let mut source = Script::new(&[Command::Stay; 4]);
        let mut out = Recorder::default();
        let summary = controller.run(&mut source, &mut out, &mut NoPacer).unwrap();

        assert_eq!(out.frames.len(), 1);
        assert!(out.frames[0].game_over);
        assert_eq!(source.commands.len(), 4, "no input read after death");
        assert_eq!(summary.reason, EndReason::OutOfLives);
        assert_eq!(summary.ticks, 0);
    }

    #[test]
    fn step_after_game_over_is_inert() {
        let mut controller = quiet_controller();
        controller.game.player_mut().lives = 0;
        let mut source = Script::new(&[]);
        let mut out = Recorder::default();

        controller.start(&mut source, &mut out).unwrap();
        controller.step(&mut source, &mut out, &mut NoPacer).unwrap();
        assert_eq!(controller.phase(), Phase::GameOver);
        let frames = out.frames.len();

        controller.step(&mut source, &mut out, &mut NoPacer).unwrap();
        assert_eq!(out.frames.len(), frames);
        assert_eq!(controller.game().tick(), 0);
    }
}
