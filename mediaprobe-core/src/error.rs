// ============================================================================
// mediaprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Probing Library
//
// Every failure in this crate is surfaced to the immediate caller as a
// `CoreError`. Nothing is retried or recovered internally.
//
// KEY COMPONENTS:
// - CoreError: the crate-wide error enum
// - CoreResult: result alias used throughout the crate
// - Constructor helpers for process-related errors

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced while running ffprobe or decoding its output.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The external process could not be started.
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    /// The process started but waiting on it (or draining its stdout) failed.
    #[error("Failed while waiting on command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    /// The process ran to completion with a non-success status.
    #[error("Command '{0}' ended unexpectedly ({1}): {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Required dependency '{0}' not found")]
    DependencyNotFound(String),

    /// The captured output was not valid probe JSON.
    #[error("Could not decode ffprobe JSON output: {0}")]
    JsonParseError(String),

    #[error("Unexpected ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for mediaprobe operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

pub fn command_wait_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), err)
}

pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    detail: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(command.into(), status, detail.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_start_error_mentions_command() {
        let err = command_start_error(
            "ffprobe",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("Failed to start"));
        assert!(msg.contains("ffprobe"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_json_parse_error_keeps_detail() {
        let err = CoreError::JsonParseError("EOF while parsing an object at line 1 column 12".into());
        assert!(err.to_string().contains("line 1 column 12"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_failed_error_includes_status_and_detail() {
        use std::os::unix::process::ExitStatusExt;

        let err = command_failed_error("ffprobe", ExitStatus::from_raw(1 << 8), "Invalid data found");
        let msg = err.to_string();
        assert!(msg.contains("ffprobe"));
        assert!(msg.contains("exit status: 1"));
        assert!(msg.contains("Invalid data found"));
    }
}
