//! The finalized user selection for one run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a run can't start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Audio list empty or no video chosen.
    #[error("Please select both audio and video files.")]
    MissingInputs,

    /// A run is already in flight.
    #[error("A run is already in progress.")]
    RunInProgress,
}

/// Inputs for a single run: ordered audio files, one video, one output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Audio files in the order they are concatenated.
    pub audio_paths: Vec<PathBuf>,
    /// Video that is looped or truncated to the audio length.
    pub video_path: PathBuf,
    /// Final output file.
    pub output_path: PathBuf,
}

impl Selection {
    /// Create a selection, rejecting empty inputs.
    pub fn new(
        audio_paths: Vec<PathBuf>,
        video_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, ValidationError> {
        let video_path = video_path.into();
        let output_path = output_path.into();

        if audio_paths.is_empty()
            || audio_paths.iter().any(|p| is_blank(p))
            || is_blank(&video_path)
            || is_blank(&output_path)
        {
            return Err(ValidationError::MissingInputs);
        }

        Ok(Self {
            audio_paths,
            video_path,
            output_path,
        })
    }

    /// Extension of the first audio file, used for the intermediate artifact.
    pub fn audio_extension(&self) -> Option<&str> {
        self.audio_paths
            .first()
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_selection() {
        let selection = Selection::new(
            vec![PathBuf::from("a.mp3"), PathBuf::from("b.mp3")],
            "v.mp4",
            "out.mp4",
        )
        .unwrap();
        assert_eq!(selection.audio_paths.len(), 2);
        assert_eq!(selection.audio_extension(), Some("mp3"));
    }

    #[test]
    fn rejects_empty_audio() {
        let err = Selection::new(Vec::new(), "v.mp4", "out.mp4").unwrap_err();
        assert_eq!(err, ValidationError::MissingInputs);
    }

    #[test]
    fn rejects_empty_video_or_output() {
        let audio = vec![PathBuf::from("a.mp3")];
        assert!(Selection::new(audio.clone(), "", "out.mp4").is_err());
        assert!(Selection::new(audio, "v.mp4", "").is_err());
    }

    #[test]
    fn audio_extension_absent() {
        let selection = Selection::new(vec![PathBuf::from("track")], "v.mp4", "o.mp4").unwrap();
        assert_eq!(selection.audio_extension(), None);
    }

    #[test]
    fn validation_message_matches_dialog_text() {
        assert_eq!(
            ValidationError::MissingInputs.to_string(),
            "Please select both audio and video files."
        );
    }
}
