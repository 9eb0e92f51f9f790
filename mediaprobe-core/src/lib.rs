//! Structured media metadata from ffprobe.
//!
//! This crate runs the external `ffprobe` tool against a file, captures its
//! JSON report and decodes it into typed records describing the container
//! ([`FormatInfo`]) and each of its streams ([`StreamInfo`]).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediaprobe_core::{Prober, StreamKind};
//! use mediaprobe_core::config::ProbeConfigBuilder;
//!
//! let config = ProbeConfigBuilder::new()
//!     .program("/usr/local/bin/ffprobe")
//!     .build()?;
//! let result = Prober::with_config(config).probe("/path/to/movie.mkv")?;
//!
//! println!("{} ({})", result.format.format_long_name, result.format.duration);
//! for audio in result.streams_of(StreamKind::Audio) {
//!     println!("audio #{}: {}", audio.index, audio.codec_name);
//! }
//! # Ok::<(), mediaprobe_core::CoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod probe;

// Re-exports for public API
pub use config::{ProbeConfig, ProbeConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{ProcessRunner, SystemProcessRunner};
pub use probe::model::{
    ChapterInfo, Disposition, FormatInfo, ProbeErrorInfo, ProbeResult, StreamInfo, StreamKind,
    Tags, parse_rational,
};
pub use probe::{Prober, parse_probe_output, probe, probe_args};
