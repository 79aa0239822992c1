//! Blocking line reader implementing `CommandSource`.

use std::io::{self, BufRead, Write};

use crate::core::CommandSource;
use crate::map::{map_line, PROMPT};
use crate::types::Command;

/// Reads one command per line from `input`, writing prompts to `prompt_out`.
pub struct LineReader<R, W> {
    input: R,
    prompt_out: W,
    line: String,
}

impl LineReader<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self {
            input,
            prompt_out,
            line: String::with_capacity(64),
        }
    }

    /// Read one line. `None` on end of input.
    ///
    /// A line that is not valid UTF-8 reads as an empty line. Other read
    /// errors are treated as end of input so a broken stdin ends the run
    /// cleanly instead of spinning.
    fn read_line(&mut self, prompt: &str) -> Option<&str> {
        if !prompt.is_empty() {
            if let Err(err) = self.write_prompt(prompt) {
                log::warn!("failed to write prompt: {err}");
            }
        }

        self.line.clear();
        match self.input.read_line(&mut self.line) {
            Ok(0) => None,
            Ok(_) => Some(self.line.as_str()),
            // The bad line has been consumed; the next one still parses.
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                log::debug!("ignoring non UTF-8 input line: {err}");
                self.line.clear();
                Some(self.line.as_str())
            }
            Err(err) => {
                log::warn!("failed to read input: {err}");
                None
            }
        }
    }

    fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.prompt_out)
    }
}

impl<R: BufRead, W: Write> CommandSource for LineReader<R, W> {
    fn next_command(&mut self) -> Command {
        map_line(self.read_line(PROMPT))
    }

    fn acknowledge(&mut self) -> bool {
        self.read_line("Press Enter to start the adventure!").is_some()
    }
}
