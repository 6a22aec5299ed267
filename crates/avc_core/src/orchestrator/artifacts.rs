//! Per-run temporary files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::RunId;

/// The manifest and intermediate audio file of one run.
///
/// Names carry the run id, so concurrent runs never share a file. Both files
/// are removed on `cleanup()` or when the value is dropped, whichever comes
/// first.
#[derive(Debug)]
pub struct RunArtifacts {
    manifest: PathBuf,
    intermediate: PathBuf,
    cleaned: bool,
}

impl RunArtifacts {
    /// Paths under `temp_root`; `audio_ext` is the intermediate's extension.
    pub fn new(temp_root: &Path, run_id: &RunId, audio_ext: &str) -> Self {
        let audio_ext = audio_ext.trim_start_matches('.');
        Self {
            manifest: temp_root.join(format!("concat_{}.txt", run_id)),
            intermediate: temp_root.join(format!("combined_audio_{}.{}", run_id, audio_ext)),
            cleaned: false,
        }
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn intermediate(&self) -> &Path {
        &self.intermediate
    }

    /// Remove both files. Each is attempted on its own; a missing file is fine.
    pub fn cleanup(&mut self) {
        if self.cleaned {
            return;
        }
        self.cleaned = true;

        for path in [&self.manifest, &self.intermediate] {
            match fs::remove_file(path) {
                Ok(()) => tracing::debug!("Removed {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("Failed to remove {}: {}", path.display(), e),
            }
        }
    }
}

impl Drop for RunArtifacts {
    fn drop(&mut self) {
        self.cleanup();
    }
}
