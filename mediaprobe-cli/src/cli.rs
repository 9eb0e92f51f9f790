// mediaprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediaprobe: structured media metadata via ffprobe",
    long_about = "Runs ffprobe against a media file and prints its container and stream metadata."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// ffprobe executable to run.
    /// Can also be set via the MEDIAPROBE_FFPROBE environment variable.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "MEDIAPROBE_FFPROBE",
        default_value = mediaprobe_core::config::DEFAULT_FFPROBE_PROGRAM
    )]
    pub ffprobe: String,

    /// Directory to launch ffprobe in (relative inputs resolve against it)
    #[arg(long, global = true, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes a media file and prints its metadata
    Probe(ProbeArgs),

    /// Checks that ffprobe can be launched and prints its version
    Check,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Media file to probe
    #[arg(required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Print the decoded metadata as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// With --json, print on a single line
    #[arg(long, requires = "json")]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_probe_args_parse() {
        let cli = Cli::try_parse_from([
            "mediaprobe",
            "--ffprobe",
            "/opt/ffprobe",
            "probe",
            "movie.mkv",
            "--json",
            "--compact",
        ])
        .unwrap();
        assert_eq!(cli.ffprobe, "/opt/ffprobe");
        match cli.command {
            Commands::Probe(args) => {
                assert_eq!(args.input, PathBuf::from("movie.mkv"));
                assert!(args.json);
                assert!(args.compact);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_compact_requires_json() {
        assert!(Cli::try_parse_from(["mediaprobe", "probe", "a.mkv", "--compact"]).is_err());
    }

    #[test]
    fn test_probe_requires_input() {
        assert!(Cli::try_parse_from(["mediaprobe", "probe"]).is_err());
    }
}
