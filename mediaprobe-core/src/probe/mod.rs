// ============================================================================
// mediaprobe-core/src/probe/mod.rs
// ============================================================================
//
// PROBER: Run ffprobe and Decode Its Output
//
// A probe is three sequential phases, each of which can fail on its own:
// start the process, wait for it to finish while capturing stdout, decode the
// captured bytes as JSON. There is no timeout, retry or partial result.
//
// KEY COMPONENTS:
// - Prober: runs ffprobe through an injected ProcessRunner
// - parse_probe_output: the decode step on its own
// - probe: convenience entry point using the system runner and defaults

pub mod model;

use std::ffi::OsString;
use std::io;
use std::path::Path;

use crate::config::{FFPROBE_ARGS, FFPROBE_VERSION_ARG, ProbeConfig};
use crate::error::{CoreError, CoreResult};
use crate::external::{ProcessRunner, SystemProcessRunner};

use model::ProbeResult;

/// Runs ffprobe against media files.
///
/// A `Prober` holds no per-call state, so one instance may be shared between
/// threads (given a `Sync` runner) and every call spawns its own process.
///
/// # Examples
///
/// ```rust,no_run
/// use mediaprobe_core::Prober;
///
/// let prober = Prober::new();
/// let result = prober.probe("/path/to/movie.mkv")?;
/// for stream in &result.streams {
///     println!("#{} {} {}", stream.index, stream.codec_type, stream.codec_name);
/// }
/// println!("duration: {}", result.format.duration);
/// # Ok::<(), mediaprobe_core::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Prober<R: ProcessRunner = SystemProcessRunner> {
    runner: R,
    config: ProbeConfig,
}

impl Prober<SystemProcessRunner> {
    /// Creates a prober that launches `ffprobe` from the search path.
    pub fn new() -> Self {
        Self::with_runner(SystemProcessRunner::new(), ProbeConfig::default())
    }

    /// Creates a system-backed prober with the given configuration.
    pub fn with_config(config: ProbeConfig) -> Self {
        Self::with_runner(SystemProcessRunner::new(), config)
    }
}

impl Default for Prober<SystemProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> Prober<R> {
    pub fn with_runner(runner: R, config: ProbeConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Probes `path` and decodes the result.
    ///
    /// The path is handed to ffprobe untouched as the last argument; ffprobe
    /// decides whether it exists or is readable.
    ///
    /// # Errors
    ///
    /// * `CoreError::CommandStart` - ffprobe could not be launched
    /// * `CoreError::CommandWait` / `CoreError::CommandFailed` - ffprobe did
    ///   not finish successfully
    /// * `CoreError::JsonParseError` - the output was not valid probe JSON
    pub fn probe<P: AsRef<Path>>(&self, path: P) -> CoreResult<ProbeResult> {
        let path = path.as_ref();
        let args = probe_args(path);
        log::debug!("Probing {} with {}", path.display(), self.config.program);

        let stdout = self
            .runner
            .run(&self.config.program, &args, self.config.working_dir.as_deref())
            .map_err(describe_failure)?;

        let result = parse_probe_output(&stdout)?;
        log::debug!(
            "Decoded {} stream(s), {} chapter(s) from {}",
            result.streams.len(),
            result.chapters.len(),
            path.display()
        );
        Ok(result)
    }

    /// Returns the first line of `ffprobe -version`.
    pub fn version(&self) -> CoreResult<String> {
        let args = [OsString::from(FFPROBE_VERSION_ARG)];
        let stdout = self
            .runner
            .run(&self.config.program, &args, self.config.working_dir.as_deref())?;

        let text = String::from_utf8_lossy(&stdout);
        text.lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                CoreError::FfprobeParse(format!(
                    "'{} {}' printed no version line",
                    self.config.program, FFPROBE_VERSION_ARG
                ))
            })
    }

    /// Like [`version`](Self::version), but reports a missing executable as
    /// `CoreError::DependencyNotFound`.
    pub fn check_available(&self) -> CoreResult<String> {
        match self.version() {
            Err(CoreError::CommandStart(cmd, e)) if e.kind() == io::ErrorKind::NotFound => {
                Err(CoreError::DependencyNotFound(cmd))
            }
            other => other,
        }
    }

    pub fn is_available(&self) -> bool {
        self.version().is_ok()
    }
}

/// Probes `path` with the default system-backed prober.
pub fn probe<P: AsRef<Path>>(path: P) -> CoreResult<ProbeResult> {
    Prober::new().probe(path)
}

/// Builds the full argument list for probing `path`.
pub fn probe_args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = FFPROBE_ARGS.iter().map(OsString::from).collect();
    args.push(path.as_os_str().to_os_string());
    args
}

/// Decodes captured ffprobe stdout.
///
/// Unknown keys are ignored. A missing or `null` `format` object (and its
/// `tags`) decode as empty records.
pub fn parse_probe_output(stdout: &[u8]) -> CoreResult<ProbeResult> {
    serde_json::from_slice(stdout).map_err(|e| CoreError::JsonParseError(e.to_string()))
}

/// Replaces the raw stdout carried by `CommandFailed` with ffprobe's own error
/// message when `-show_error` produced one.
fn describe_failure(err: CoreError) -> CoreError {
    match err {
        CoreError::CommandFailed(cmd, status, output) => {
            CoreError::CommandFailed(cmd, status, failure_detail(&output))
        }
        other => other,
    }
}

fn failure_detail(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return "no output".to_string();
    }
    match serde_json::from_str::<ProbeResult>(trimmed) {
        Ok(ProbeResult {
            error: Some(error), ..
        }) => error.to_string(),
        _ => trimmed.to_string(),
    }
}
