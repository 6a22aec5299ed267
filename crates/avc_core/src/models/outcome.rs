//! Run identity and outcome.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Diagnostic shown for any failed run.
///
/// Every failure maps to this one message; the detailed cause goes to the run log.
pub const PROCESSING_FAILED_MESSAGE: &str =
    "An error occurred during processing. Please check your FFmpeg path and files.";

/// Unique identifier of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Name used for the run log and artifact files.
    pub fn run_name(&self) -> String {
        format!("run_{}", self)
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Result of a run, delivered back to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Both ffmpeg calls exited zero; carries the output path.
    Success(PathBuf),
    /// Either call failed; carries the user-facing diagnostic.
    Failure(String),
}

impl RunOutcome {
    /// The generic failure outcome.
    pub fn processing_failed() -> Self {
        Self::Failure(PROCESSING_FAILED_MESSAGE.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success(_))
    }
}
