// ============================================================================
// mediaprobe-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type; failures that originate in the CLI
// itself (serialising output, for instance) are wrapped as
// `CoreError::OperationFailed` with a context prefix.

use mediaprobe_core::{CoreError, CoreResult};
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for adding context to errors in the CLI.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| CoreError::OperationFailed(format!("{}: {}", context, e)))
    }
}

/// Process exit code for a failed command.
pub fn exit_code(err: &CoreError) -> i32 {
    match err {
        CoreError::DependencyNotFound(_) | CoreError::CommandStart(_, _) => 127,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_context_prefixes_message() {
        let result: Result<(), String> = Err("disk full".to_string());
        let err = result.cli_context("Failed to write output").unwrap_err();
        assert_eq!(err.to_string(), "Failed to write output: disk full");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&CoreError::DependencyNotFound("ffprobe".into())), 127);
        assert_eq!(exit_code(&CoreError::JsonParseError("eof".into())), 1);
    }
}
