//! Test doubles shared by the orchestrator tests.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::EncodingSettings;
use crate::io::{CommandOutput, CommandRunner};
use crate::logging::{LogConfig, RunLogger};
use crate::models::{RunId, Selection};

use super::artifacts::RunArtifacts;
use super::types::Context;

/// One invocation seen by `RecordingRunner`.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Manifest content at the time of a concat call.
    pub manifest: Option<String>,
}

/// Runner that records calls instead of spawning processes.
///
/// On success it creates the file named by the last argument, like ffmpeg
/// writing its output.
pub struct RecordingRunner {
    calls: Mutex<Vec<RecordedCall>>,
    fail_call: Option<usize>,
    spawn_error: Option<io::ErrorKind>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_call: None,
            spawn_error: None,
        }
    }

    /// Fail the call with this zero-based index with exit code 1.
    pub fn failing_on(index: usize) -> Self {
        Self {
            fail_call: Some(index),
            ..Self::succeeding()
        }
    }

    /// Every call fails to start with this error kind.
    pub fn spawn_error(kind: io::ErrorKind) -> Self {
        Self {
            spawn_error: Some(kind),
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<CommandOutput> {
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        let manifest = if args.iter().any(|a| a == "concat") {
            args.iter()
                .position(|a| a == "-i")
                .and_then(|i| args.get(i + 1))
                .and_then(|p| fs::read_to_string(p).ok())
        } else {
            None
        };

        let index = {
            let mut calls = self.calls.lock();
            calls.push(RecordedCall {
                program: program.to_path_buf(),
                args: args.clone(),
                manifest,
            });
            calls.len() - 1
        };

        if let Some(kind) = self.spawn_error {
            return Err(io::Error::new(kind, "spawn failed"));
        }

        if self.fail_call == Some(index) {
            return Ok(CommandOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: "Invalid data found when processing input\n".to_string(),
            });
        }

        if let Some(output) = args.last() {
            fs::write(output, b"")?;
        }
        Ok(CommandOutput::with_exit_code(0))
    }
}

/// Context over two audio files and one video under `dir`.
pub fn test_context(dir: &Path, runner: Arc<dyn CommandRunner>) -> (Context, RunArtifacts) {
    let run_id = RunId::new();
    let artifacts = RunArtifacts::new(dir, &run_id, "mp3");
    let logger = Arc::new(
        RunLogger::new(run_id.run_name(), dir.join("logs"), LogConfig::default()).unwrap(),
    );
    let selection = Selection::new(
        vec![dir.join("a.mp3"), dir.join("b.mp3")],
        dir.join("v.mp4"),
        dir.join("out.mp4"),
    )
    .unwrap();

    let ctx = Context::new(
        selection,
        EncodingSettings::default(),
        run_id.run_name(),
        PathBuf::from("ffmpeg"),
        &artifacts,
        logger,
        runner,
    );
    (ctx, artifacts)
}
