// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialisation for the CLI
//
// Log records go to stderr so stdout stays clean for --json output.
//
// USAGE:
// - default: info
// - --verbose: debug
// - RUST_LOG=...: overrides both (e.g. RUST_LOG=mediaprobe_core=trace)

use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::Write;

/// Level used when RUST_LOG is not set.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger. Safe to call more than once; later calls are
/// ignored.
pub fn init(verbose: bool) {
    let level = default_level(verbose);
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => "ERROR".bright_red().to_string(),
                log::Level::Warn => "WARN ".yellow().to_string(),
                log::Level::Info => "INFO ".green().to_string(),
                log::Level::Debug => "DEBUG".blue().to_string(),
                log::Level::Trace => "TRACE".magenta().to_string(),
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level, record.args())
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with level: {}", level);
    }
}
