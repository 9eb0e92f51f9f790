// ============================================================================
// mediaprobe-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ProbeConfig
//
// Fluent construction of ProbeConfig with defaults for every field and
// validation at build time.

use std::path::PathBuf;

use super::{DEFAULT_FFPROBE_PROGRAM, ProbeConfig};
use crate::error::CoreResult;

/// Builder for creating ProbeConfig instances.
#[derive(Debug, Clone)]
pub struct ProbeConfigBuilder {
    program: String,
    working_dir: Option<PathBuf>,
}

impl Default for ProbeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeConfigBuilder {
    /// Creates a new builder using `ffprobe` from the search path and the
    /// caller's working directory.
    pub fn new() -> Self {
        Self {
            program: DEFAULT_FFPROBE_PROGRAM.to_string(),
            working_dir: None,
        }
    }

    /// Sets the ffprobe executable name or path.
    ///
    /// # Arguments
    ///
    /// * `program` - Executable name (searched on PATH) or an explicit path
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets the directory ffprobe is launched in.
    ///
    /// Relative input paths are resolved by ffprobe against this directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Builds a ProbeConfig, rejecting an empty program name.
    pub fn build(self) -> CoreResult<ProbeConfig> {
        let config = ProbeConfig {
            program: self.program,
            working_dir: self.working_dir,
        };
        config.validate()?;
        Ok(config)
    }
}
