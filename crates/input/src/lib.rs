//! Line-based input module.
//!
//! Each tick the runner blocks on one line of input. This crate maps typed
//! literals into [`crate::types::Command`] and provides a [`LineReader`] that
//! implements the core's `CommandSource` over any buffered reader.

pub mod map;
pub mod reader;

pub use sonic_runner_core as core;
pub use sonic_runner_types as types;

pub use map::{map_line, PROMPT};
pub use reader::LineReader;
