//! Run handlers: validation, output path, overwrite prompt and completion.

use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;

use avc_core::models::RunOutcome;
use avc_core::orchestrator::run_in_background;
use avc_core::workflow::{output_decision, Dialog, OutputDecision};

use crate::app::{App, FolderType, Message};

impl App {
    /// Handle StartRun - check inputs, then ask for the output path.
    pub fn start_run(&mut self) -> Task<Message> {
        if let Err(e) = self.workflow.check_ready() {
            tracing::warn!("Cannot start run: {}", e);
            return self.show_dialog(Dialog::validation(&e));
        }
        self.browse_output()
    }

    /// Handle the save dialog result.
    pub fn handle_output_chosen(&mut self, chosen: Option<PathBuf>) -> Task<Message> {
        self.modal_open = false;
        let output_extension = self.config.settings().encoding.output_extension.clone();

        match output_decision(chosen, &output_extension) {
            OutputDecision::Cancelled => {
                tracing::info!("Output location not selected, run cancelled");
                self.show_dialog(Dialog::output_cancelled())
            }
            OutputDecision::ConfirmOverwrite(path) => {
                self.remember_folder(FolderType::Output, &path);
                self.confirm_overwrite(path)
            }
            OutputDecision::Proceed(path) => {
                self.remember_folder(FolderType::Output, &path);
                self.begin_run(path)
            }
        }
    }

    /// Handle the overwrite prompt. Declining ends the attempt quietly.
    pub fn handle_overwrite_answered(&mut self, path: PathBuf, overwrite: bool) -> Task<Message> {
        self.modal_open = false;
        if !overwrite {
            tracing::info!("Overwrite of {} declined", path.display());
            return Task::none();
        }
        self.begin_run(path)
    }

    /// Handle RunFinished - back to idle, then report.
    pub fn handle_run_finished(&mut self, outcome: RunOutcome) -> Task<Message> {
        match &outcome {
            RunOutcome::Success(path) => tracing::info!("Run succeeded: {}", path.display()),
            RunOutcome::Failure(message) => tracing::warn!("Run failed: {}", message),
        }
        let dialog = self.workflow.complete(&outcome);
        self.show_dialog(dialog)
    }

    fn begin_run(&mut self, output_path: PathBuf) -> Task<Message> {
        match self.workflow.begin(output_path) {
            Ok(selection) => Task::perform(
                run_in_background(Arc::clone(&self.orchestrator), selection),
                Message::RunFinished,
            ),
            Err(e) => {
                tracing::warn!("Cannot start run: {}", e);
                self.show_dialog(Dialog::validation(&e))
            }
        }
    }
}
