//! Configuration for how ffprobe is located and invoked.
//!
//! The flag set passed to ffprobe is fixed; only the executable and the
//! working directory the process is launched in are configurable.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::ProbeConfigBuilder;

/// Executable name used when no override is configured. Resolved through the
/// host's standard process search path.
pub const DEFAULT_FFPROBE_PROGRAM: &str = "ffprobe";

/// Flags passed to every probe invocation, ahead of the input path.
///
/// Quiet logging, JSON output, and format, stream, error and chapter sections.
pub const FFPROBE_ARGS: [&str; 8] = [
    "-v",
    "quiet",
    "-print_format",
    "json",
    "-show_format",
    "-show_streams",
    "-show_error",
    "-show_chapters",
];

/// Flag used to query the ffprobe version banner.
pub const FFPROBE_VERSION_ARG: &str = "-version";

/// Settings for a [`Prober`](crate::Prober).
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::config::ProbeConfigBuilder;
///
/// let config = ProbeConfigBuilder::new()
///     .program("/opt/ffmpeg/bin/ffprobe")
///     .working_dir("/srv/media")
///     .build()
///     .unwrap();
/// assert_eq!(config.program, "/opt/ffmpeg/bin/ffprobe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Name or path of the ffprobe executable
    pub program: String,

    /// Directory the process is started in (`None` inherits the caller's)
    pub working_dir: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_FFPROBE_PROGRAM.to_string(),
            working_dir: None,
        }
    }
}

impl ProbeConfig {
    /// Checks the configuration for values that can never launch a process.
    pub fn validate(&self) -> CoreResult<()> {
        if self.program.trim().is_empty() {
            return Err(CoreError::Config(
                "ffprobe program name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
