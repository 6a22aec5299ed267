//! Locating the ffmpeg executable.

use std::path::{Path, PathBuf};

use which::which;

use crate::orchestrator::{StepError, StepResult};

/// Name of the ffmpeg executable on PATH.
pub const FFMPEG: &str = "ffmpeg";

/// Resolve ffmpeg from the configured path, or from PATH when it is empty.
pub fn resolve_ffmpeg(configured: &str) -> StepResult<PathBuf> {
    let configured = configured.trim();
    if !configured.is_empty() {
        let path = Path::new(configured);
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(StepError::tool_not_found(format!(
            "configured ffmpeg not found: {}",
            path.display()
        )));
    }

    which(FFMPEG)
        .or_else(|_| {
            if cfg!(windows) {
                which(format!("{FFMPEG}.exe"))
            } else {
                Err(which::Error::CannotFindBinaryPath)
            }
        })
        .map_err(|_| StepError::tool_not_found(format!("`{FFMPEG}` not found in PATH")))
}
