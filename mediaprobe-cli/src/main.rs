// mediaprobe-cli/src/main.rs
//
// Entry point for the `mediaprobe` binary: parses arguments, installs the
// logger, builds a Prober from the global options and dispatches to the
// selected command. Errors are printed to stderr and mapped to an exit code.

use clap::Parser;
use mediaprobe_cli::commands::probe_config;
use mediaprobe_cli::error::{CliResult, exit_code};
use mediaprobe_cli::output::print_error;
use mediaprobe_cli::{Cli, Commands, logging, run_check, run_probe};
use mediaprobe_core::Prober;
use std::process;

fn run(cli: &Cli) -> CliResult<()> {
    let prober = Prober::with_config(probe_config(cli)?);
    match &cli.command {
        Commands::Probe(args) => run_probe(&prober, args),
        Commands::Check => run_check(&prober),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        print_error(&e.to_string());
        process::exit(exit_code(&e));
    }
}
