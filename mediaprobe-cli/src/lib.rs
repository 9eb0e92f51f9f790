// mediaprobe-cli/src/lib.rs
//
// Library portion of the mediaprobe CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ProbeArgs};
pub use commands::check::run_check;
pub use commands::probe::run_probe;
