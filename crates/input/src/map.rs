//! Mapping from typed lines to commands.

use crate::types::Command;

/// Prompt shown before each read.
pub const PROMPT: &str = "Move [w/s/d/Enter/q]: ";

/// Map one line of input. `None` means end of input, which quits.
///
/// Unknown literals are not an error; they keep the runner in its lane.
pub fn map_line(line: Option<&str>) -> Command {
    let Some(line) = line else {
        return Command::Quit;
    };
    let command = Command::from_str(line);
    if command == Command::Stay && !is_stay_literal(line) {
        log::trace!("unrecognised input {:?}, staying", line.trim());
    }
    command
}

fn is_stay_literal(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.eq_ignore_ascii_case("stay")
}
