//! std::process-backed [`ProcessRunner`].
//!
//! Stdout is captured in full, stderr is left attached to the parent so the
//! tool's own diagnostics reach the terminal, and stdin is closed.

use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};

use super::{ProcessRunner, display_command};
use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};

/// Runs commands as real child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[OsString],
        working_dir: Option<&Path>,
    ) -> CoreResult<Vec<u8>> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        log::debug!("Running: {}", display_command(program, args));

        let mut child = cmd.spawn().map_err(|e| command_start_error(program, e))?;

        // Drain stdout before waiting so a chatty child never blocks on a full
        // pipe. The pipe is dropped at the end of this block, which unblocks
        // the child if reading stopped early.
        let mut stdout = Vec::new();
        let read_result = match child.stdout.take() {
            Some(mut pipe) => pipe.read_to_end(&mut stdout).map(|_| ()),
            None => Ok(()),
        };

        // Always reap, even when draining failed.
        let status = child.wait().map_err(|e| command_wait_error(program, e))?;
        read_result.map_err(|e| command_wait_error(program, e))?;

        log::trace!("{} exited with {} after writing {} bytes", program, status, stdout.len());

        if !status.success() {
            let detail = String::from_utf8_lossy(&stdout).into_owned();
            return Err(command_failed_error(program, status, detail));
        }

        Ok(stdout)
    }
}
