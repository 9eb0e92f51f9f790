//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// `check`: verifies ffprobe can be launched.
pub mod check;

/// `probe`: probes one file and prints the result.
pub mod probe;

use crate::cli::Cli;
use mediaprobe_core::{ProbeConfig, ProbeConfigBuilder};

use crate::error::CliResult;

/// Builds the core configuration from global CLI options.
pub fn probe_config(cli: &Cli) -> CliResult<ProbeConfig> {
    let mut builder = ProbeConfigBuilder::new().program(cli.ffprobe.clone());
    if let Some(dir) = &cli.working_dir {
        builder = builder.working_dir(dir.clone());
    }
    builder.build()
}
