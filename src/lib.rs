//! Sonic Runner (workspace facade crate).
//!
//! Re-exports the workspace crates as `sonic_runner::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use sonic_runner_core as core;
pub use sonic_runner_input as input;
pub use sonic_runner_term as term;
pub use sonic_runner_types as types;
