//! TerminalRenderer: writes frames, banners and notices to a terminal.
//!
//! The run reads input line by line, so the terminal stays in cooked mode. The
//! screen is cleared before each frame only when the output is a real terminal;
//! piped output gets plain consecutive frames.

use std::io::{self, IsTerminal, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::banner;
use crate::core::{GameSnapshot, GameSummary, Notice, Presenter};
use crate::game_view::GameView;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    clear_screen: bool,
    view: GameView,
    buf: String,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let clear_screen = stdout.is_terminal();
        Self::with_writer(stdout, clear_screen)
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, clear_screen: bool) -> Self {
        Self {
            out,
            clear_screen,
            view: GameView::new(),
            buf: String::with_capacity(512),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.out.queue(cursor::MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn write_block(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for TerminalRenderer<W> {
    fn intro(&mut self) -> io::Result<()> {
        self.clear()?;
        self.write_block(banner::INTRO)
    }

    fn frame(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        self.clear()?;
        let mut buf = std::mem::take(&mut self.buf);
        self.view.render_into(snapshot, &mut buf);
        let result = self.write_block(&buf);
        self.buf = buf;
        result
    }

    fn notice(&mut self, notice: Notice) -> io::Result<()> {
        self.write_block(notice.message())
    }

    fn game_over(&mut self, summary: &GameSummary) -> io::Result<()> {
        self.write_block(&banner::game_over(summary))
    }
}
