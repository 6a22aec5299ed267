//! Idle/Running state of the main window, independent of any UI toolkit.
//!
//! The UI forwards user actions here and renders whatever this reports, so
//! every rule about when controls are enabled, what the labels say and
//! which dialog follows a run lives in one testable place.

mod dialog;

pub use dialog::{Dialog, DialogLevel};

use std::path::PathBuf;
use std::time::Instant;

use crate::models::{RunOutcome, Selection, ValidationError};

/// Status text while idle.
pub const STATUS_READY: &str = "Ready";
/// Status text while a run is in flight.
pub const STATUS_PROCESSING: &str = "Processing...";

const NO_AUDIO_LABEL: &str = "No Audio Files Selected";
const NO_VIDEO_LABEL: &str = "No Video File Selected";

/// Upper bound of the progress value.
pub const PROGRESS_MAX: f32 = 100.0;
const PROGRESS_STEP: f32 = 1.0;

/// Current phase of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { started: Instant },
}

/// What to do with the path returned by the save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDecision {
    /// No path chosen; show the cancellation notice.
    Cancelled,
    /// Path exists; ask before overwriting.
    ConfirmOverwrite(PathBuf),
    /// Path is free; start the run.
    Proceed(PathBuf),
}

/// Decide how to continue after the save dialog closes.
///
/// A name without an extension gets `output_extension`, as the save dialog's
/// default extension would add it.
pub fn output_decision(chosen: Option<PathBuf>, output_extension: &str) -> OutputDecision {
    let Some(mut path) = chosen.filter(|p| !p.as_os_str().is_empty()) else {
        return OutputDecision::Cancelled;
    };

    let output_extension = output_extension.trim_start_matches('.');
    if path.extension().is_none() && !output_extension.is_empty() {
        path.set_extension(output_extension);
    }

    if path.exists() {
        OutputDecision::ConfirmOverwrite(path)
    } else {
        OutputDecision::Proceed(path)
    }
}

/// State behind the main window.
#[derive(Debug, Clone)]
pub struct Workflow {
    phase: Phase,
    audio_paths: Vec<PathBuf>,
    video_path: Option<PathBuf>,
    audio_label: String,
    video_label: String,
    progress: f32,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            audio_paths: Vec::new(),
            video_path: None,
            audio_label: NO_AUDIO_LABEL.to_string(),
            video_label: NO_VIDEO_LABEL.to_string(),
            progress: 0.0,
        }
    }

    /// Store the audio picker result. An empty list means the picker was cancelled.
    pub fn select_audio(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        self.audio_label = format!("Selected {} Audio File(s)", paths.len());
        self.audio_paths = paths;
    }

    /// Store the video picker result. `None` means the picker was cancelled.
    pub fn select_video(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        self.video_label = format!("Selected Video File: {}", name);
        self.video_path = Some(path);
    }

    /// Check that a run may start.
    pub fn check_ready(&self) -> Result<(), ValidationError> {
        if self.is_running() {
            return Err(ValidationError::RunInProgress);
        }
        if self.audio_paths.is_empty() || self.video_path.is_none() {
            return Err(ValidationError::MissingInputs);
        }
        Ok(())
    }

    /// Enter Running and return the selection to hand to the orchestrator.
    pub fn begin(&mut self, output_path: impl Into<PathBuf>) -> Result<Selection, ValidationError> {
        self.check_ready()?;
        let video_path = self
            .video_path
            .clone()
            .ok_or(ValidationError::MissingInputs)?;
        let selection = Selection::new(self.audio_paths.clone(), video_path, output_path)?;

        self.phase = Phase::Running {
            started: Instant::now(),
        };
        self.progress = 0.0;
        tracing::info!(
            "Run started: {} audio file(s) -> {}",
            selection.audio_paths.len(),
            selection.output_path.display()
        );
        Ok(selection)
    }

    /// Advance the indeterminate progress animation.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.progress += PROGRESS_STEP;
        if self.progress >= PROGRESS_MAX {
            self.progress = 0.0;
        }
    }

    /// Return to Idle and build the dialog reporting `outcome`.
    pub fn complete(&mut self, outcome: &RunOutcome) -> Dialog {
        if let Phase::Running { started } = self.phase {
            tracing::info!(
                "Run finished in {:.1}s (success: {})",
                started.elapsed().as_secs_f64(),
                outcome.is_success()
            );
        }
        self.phase = Phase::Idle;
        self.progress = 0.0;
        Dialog::for_outcome(outcome)
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Buttons are only usable while idle.
    pub fn controls_enabled(&self) -> bool {
        !self.is_running()
    }

    pub fn status_text(&self) -> &str {
        if self.is_running() {
            STATUS_PROCESSING
        } else {
            STATUS_READY
        }
    }

    pub fn audio_label(&self) -> &str {
        &self.audio_label
    }

    pub fn video_label(&self) -> &str {
        &self.video_label
    }

    #[cfg(test)]
    pub fn audio_paths(&self) -> &[PathBuf] {
        &self.audio_paths
    }

    #[cfg(test)]
    pub fn video_path(&self) -> Option<&std::path::Path> {
        self.video_path.as_deref()
    }

    /// Progress bar value in `0.0..PROGRESS_MAX`.
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PROCESSING_FAILED_MESSAGE;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn ready_workflow() -> Workflow {
        let mut wf = Workflow::new();
        wf.select_audio(vec![PathBuf::from("a.mp3"), PathBuf::from("b.mp3")]);
        wf.select_video(Some(PathBuf::from("/videos/clip.mp4")));
        wf
    }

    #[test]
    fn starts_idle_with_placeholder_labels() {
        let wf = Workflow::new();
        assert_eq!(wf.phase(), Phase::Idle);
        assert!(wf.controls_enabled());
        assert_eq!(wf.status_text(), "Ready");
        assert_eq!(wf.audio_label(), "No Audio Files Selected");
        assert_eq!(wf.video_label(), "No Video File Selected");
    }

    #[test]
    fn selection_updates_labels() {
        let wf = ready_workflow();
        assert_eq!(wf.audio_label(), "Selected 2 Audio File(s)");
        assert_eq!(wf.video_label(), "Selected Video File: clip.mp4");
        assert_eq!(wf.audio_paths().len(), 2);
        assert_eq!(wf.video_path(), Some(Path::new("/videos/clip.mp4")));
    }

    #[test]
    fn cancelled_pickers_keep_previous_selection() {
        let mut wf = ready_workflow();
        wf.select_audio(Vec::new());
        wf.select_video(None);
        assert_eq!(wf.audio_paths().len(), 2);
        assert_eq!(wf.audio_label(), "Selected 2 Audio File(s)");
        assert!(wf.video_path().is_some());
    }

    #[test]
    fn missing_inputs_block_start() {
        let mut wf = Workflow::new();
        assert_eq!(wf.check_ready(), Err(ValidationError::MissingInputs));

        wf.select_audio(vec![PathBuf::from("a.mp3")]);
        assert_eq!(wf.begin("out.mp4"), Err(ValidationError::MissingInputs));
        assert!(!wf.is_running());

        let mut wf = Workflow::new();
        wf.select_video(Some(PathBuf::from("v.mp4")));
        assert_eq!(wf.check_ready(), Err(ValidationError::MissingInputs));
    }

    #[test]
    fn begin_locks_controls() {
        let mut wf = ready_workflow();
        let selection = wf.begin("out.mp4").unwrap();

        assert_eq!(selection.audio_paths, vec![PathBuf::from("a.mp3"), PathBuf::from("b.mp3")]);
        assert_eq!(selection.output_path, PathBuf::from("out.mp4"));
        assert!(wf.is_running());
        assert!(!wf.controls_enabled());
        assert_eq!(wf.status_text(), "Processing...");
        assert_eq!(wf.begin("again.mp4"), Err(ValidationError::RunInProgress));
    }

    #[test]
    fn tick_only_moves_while_running() {
        let mut wf = ready_workflow();
        wf.tick();
        assert_eq!(wf.progress(), 0.0);

        wf.begin("out.mp4").unwrap();
        wf.tick();
        wf.tick();
        assert_eq!(wf.progress(), 2.0);
    }

    #[test]
    fn tick_wraps_at_max() {
        let mut wf = ready_workflow();
        wf.begin("out.mp4").unwrap();
        for _ in 0..150 {
            wf.tick();
        }
        assert!(wf.progress() < PROGRESS_MAX);
        assert_eq!(wf.progress(), 50.0);
    }

    #[test]
    fn failure_returns_to_idle_with_error_dialog() {
        let mut wf = ready_workflow();
        wf.begin("out.mp4").unwrap();
        wf.tick();

        let dialog = wf.complete(&RunOutcome::processing_failed());

        assert!(wf.controls_enabled());
        assert_eq!(wf.status_text(), "Ready");
        assert_eq!(wf.progress(), 0.0);
        assert_eq!(dialog.level, DialogLevel::Error);
        assert_eq!(dialog.title, "Processing Error");
        assert_eq!(dialog.message, PROCESSING_FAILED_MESSAGE);
    }

    #[test]
    fn success_returns_to_idle_with_path() {
        let mut wf = ready_workflow();
        wf.begin("/out/final.mp4").unwrap();

        let dialog = wf.complete(&RunOutcome::Success(PathBuf::from("/out/final.mp4")));

        assert!(!wf.is_running());
        assert_eq!(dialog.level, DialogLevel::Info);
        assert_eq!(dialog.title, "Success");
        assert_eq!(
            dialog.message,
            "Process completed successfully. Output file is /out/final.mp4"
        );
        // Selection survives for the next run
        assert_eq!(wf.audio_paths().len(), 2);
    }

    #[test]
    fn output_decision_cancelled() {
        assert_eq!(output_decision(None, "mp4"), OutputDecision::Cancelled);
        assert_eq!(
            output_decision(Some(PathBuf::new()), "mp4"),
            OutputDecision::Cancelled
        );
    }

    #[test]
    fn output_decision_adds_missing_extension() {
        let dir = tempdir().unwrap();
        let chosen = dir.path().join("movie");
        assert_eq!(
            output_decision(Some(chosen), ".mp4"),
            OutputDecision::Proceed(dir.path().join("movie.mp4"))
        );
    }

    #[test]
    fn output_decision_existing_file_needs_confirmation() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("movie.mp4");
        fs::write(&existing, b"old").unwrap();

        assert_eq!(
            output_decision(Some(existing.clone()), "mp4"),
            OutputDecision::ConfirmOverwrite(existing)
        );
    }
}
