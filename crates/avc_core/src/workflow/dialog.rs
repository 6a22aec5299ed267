//! Modal dialogs shown by the main window.

use crate::models::{RunOutcome, ValidationError};

/// Severity of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
    Error,
}

/// Title and text of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub level: DialogLevel,
    pub title: String,
    pub message: String,
}

impl Dialog {
    fn new(level: DialogLevel, title: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.into(),
        }
    }

    /// A run can't start.
    pub fn validation(error: &ValidationError) -> Self {
        Self::new(DialogLevel::Error, "Error", error.to_string())
    }

    /// The save dialog was closed without a path.
    pub fn output_cancelled() -> Self {
        Self::new(
            DialogLevel::Info,
            "Info",
            "Output file location was not selected. Processing cancelled.",
        )
    }

    /// Yes/No question before replacing an existing output file.
    pub fn confirm_overwrite() -> Self {
        Self::new(
            DialogLevel::Warning,
            "Confirm Overwrite",
            "Output file already exists. Do you want to overwrite it?",
        )
    }

    /// Result of a finished run.
    pub fn for_outcome(outcome: &RunOutcome) -> Self {
        match outcome {
            RunOutcome::Success(path) => Self::new(
                DialogLevel::Info,
                "Success",
                format!(
                    "Process completed successfully. Output file is {}",
                    path.display()
                ),
            ),
            RunOutcome::Failure(message) => {
                Self::new(DialogLevel::Error, "Processing Error", message.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_dialog_is_error() {
        let dialog = Dialog::validation(&ValidationError::MissingInputs);
        assert_eq!(dialog.level, DialogLevel::Error);
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.message, "Please select both audio and video files.");
    }

    #[test]
    fn cancellation_is_informational() {
        let dialog = Dialog::output_cancelled();
        assert_eq!(dialog.level, DialogLevel::Info);
        assert!(dialog.message.contains("Processing cancelled"));
    }

    #[test]
    fn overwrite_prompt_text() {
        let dialog = Dialog::confirm_overwrite();
        assert_eq!(dialog.title, "Confirm Overwrite");
        assert!(dialog.message.ends_with("Do you want to overwrite it?"));
    }
}
