// mediaprobe-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::ProcessRunner;
use crate::error::{CoreError, CoreResult};

/// A command the mock was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

/// Mock implementation of ProcessRunner.
///
/// Queued results are handed out in order, one per call. Running out of
/// queued results panics so tests notice unexpected invocations.
#[derive(Debug, Default)]
pub struct MockProcessRunner {
    results: Mutex<VecDeque<CoreResult<Vec<u8>>>>,
    received_calls: Mutex<Vec<RecordedCall>>,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Queues a successful run printing `stdout`.
    pub fn add_success(&self, stdout: impl Into<Vec<u8>>) -> &Self {
        self.push(Ok(stdout.into()))
    }

    /// Queues a failed run.
    pub fn add_error(&self, error: CoreError) -> &Self {
        self.push(Err(error))
    }

    pub fn get_received_calls(&self) -> Vec<RecordedCall> {
        self.received_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(&self, result: CoreResult<Vec<u8>>) -> &Self {
        if let Ok(mut results) = self.results.lock() {
            results.push_back(result);
        }
        self
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[OsString],
        working_dir: Option<&Path>,
    ) -> CoreResult<Vec<u8>> {
        let call = RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string_lossy().into_owned()).collect(),
            working_dir: working_dir.map(Path::to_path_buf),
        };
        log::info!("MockProcessRunner: {} {:?}", call.program, call.args);
        if let Ok(mut calls) = self.received_calls.lock() {
            calls.push(call.clone());
        }

        let next = self.results.lock().ok().and_then(|mut r| r.pop_front());
        match next {
            Some(result) => result,
            None => panic!("MockProcessRunner: no result queued for {call:?}"),
        }
    }
}
