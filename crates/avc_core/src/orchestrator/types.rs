//! Core types for the orchestrator pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::EncodingSettings;
use crate::io::CommandRunner;
use crate::logging::RunLogger;
use crate::models::Selection;

use super::artifacts::RunArtifacts;

/// Read-only context passed to pipeline steps.
///
/// Mutable results go in `RunState`.
pub struct Context {
    /// Audio, video and output chosen by the user.
    pub selection: Selection,
    /// Codec choices for the mux call.
    pub encoding: EncodingSettings,
    /// Run name used in logs and errors.
    pub run_name: String,
    /// Resolved ffmpeg executable.
    pub ffmpeg: PathBuf,
    /// Per-run concat manifest.
    pub manifest_path: PathBuf,
    /// Per-run concatenated audio file.
    pub intermediate_path: PathBuf,
    /// Per-run logger.
    pub logger: Arc<RunLogger>,
    /// Process runner for external tools.
    pub runner: Arc<dyn CommandRunner>,
}

impl Context {
    /// Create a context; artifact paths are copied from `artifacts`.
    pub fn new(
        selection: Selection,
        encoding: EncodingSettings,
        run_name: impl Into<String>,
        ffmpeg: PathBuf,
        artifacts: &RunArtifacts,
        logger: Arc<RunLogger>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            selection,
            encoding,
            run_name: run_name.into(),
            ffmpeg,
            manifest_path: artifacts.manifest().to_path_buf(),
            intermediate_path: artifacts.intermediate().to_path_buf(),
            logger,
            runner,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.selection.output_path
    }
}

/// Results accumulated by the steps of one run.
///
/// Each step writes only its own section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunState {
    pub run_id: String,
    /// When the run started (RFC 3339, local time).
    pub started_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concat: Option<ConcatOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mux: Option<MuxOutput>,
}

impl RunState {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            started_at: Some(chrono::Local::now().to_rfc3339()),
            ..Default::default()
        }
    }

    /// Concatenated audio produced by call #1, if it ran.
    pub fn intermediate(&self) -> Option<&Path> {
        self.concat.as_ref().map(|c| c.intermediate_path.as_path())
    }
}

/// Output from the ConcatAudio step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcatOutput {
    pub manifest_path: PathBuf,
    pub intermediate_path: PathBuf,
    /// Number of manifest entries.
    pub track_count: usize,
}

/// Output from the MuxVideo step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuxOutput {
    pub output_path: PathBuf,
    pub exit_code: i32,
}
