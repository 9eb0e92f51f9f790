// ============================================================================
// mediaprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Process Execution Abstraction
//
// This module encapsulates how external command-line tools are launched. The
// Prober never spawns processes directly; it goes through a `ProcessRunner`,
// so tests can substitute canned output for a real ffprobe.
//
// KEY COMPONENTS:
// - ProcessRunner: trait for running a command and capturing its stdout
// - SystemProcessRunner: implementation backed by std::process
// - MockProcessRunner: recording fake (tests / `test-mocks` feature)

use std::ffi::OsString;
use std::path::Path;

use crate::error::CoreResult;

/// Contains the std::process-backed runner
pub mod process_runner;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use process_runner::SystemProcessRunner;

/// Something that can run a named command and hand back its standard output.
///
/// Implementations must block until the command has terminated and must
/// return an error (never partial output) when it could not be started, could
/// not be waited on, or exited unsuccessfully.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::CoreResult;
/// use mediaprobe_core::external::ProcessRunner;
/// use std::ffi::OsString;
/// use std::path::Path;
///
/// struct CannedRunner(&'static str);
///
/// impl ProcessRunner for CannedRunner {
///     fn run(&self, _program: &str, _args: &[OsString], _dir: Option<&Path>) -> CoreResult<Vec<u8>> {
///         Ok(self.0.as_bytes().to_vec())
///     }
/// }
///
/// let out = CannedRunner("{}").run("ffprobe", &[], None).unwrap();
/// assert_eq!(out, b"{}");
/// ```
pub trait ProcessRunner {
    /// Runs `program` with `args`, optionally inside `working_dir`, and returns
    /// everything it wrote to stdout.
    fn run(&self, program: &str, args: &[OsString], working_dir: Option<&Path>)
    -> CoreResult<Vec<u8>>;
}

/// Renders a command line for log output.
pub(crate) fn display_command(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}
