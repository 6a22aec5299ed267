//! Main application state and message routing.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use iced::{Element, Subscription, Task};

use avc_core::config::ConfigManager;
use avc_core::io::SystemRunner;
use avc_core::models::RunOutcome;
use avc_core::orchestrator::Orchestrator;
use avc_core::workflow::{Dialog, Workflow};

use crate::windows::main_window;

pub const WINDOW_TITLE: &str = "Audio Video Combiner";
pub const WINDOW_SIZE: (f32, f32) = (600.0, 400.0);

/// Interval of the progress animation while a run is in flight.
const PROGRESS_TICK: Duration = Duration::from_millis(10);

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    SelectAudio,
    AudioSelected(Vec<PathBuf>),
    SelectVideo,
    VideoSelected(Option<PathBuf>),
    StartRun,
    OutputChosen(Option<PathBuf>),
    OverwriteAnswered(PathBuf, bool),
    RunFinished(RunOutcome),
    Tick,
    DialogClosed,
}

/// Which folder a dialog remembers in `[paths]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderType {
    Audio,
    Video,
    Output,
}

pub struct App {
    pub(crate) config: ConfigManager,
    pub(crate) workflow: Workflow,
    pub(crate) orchestrator: Arc<Orchestrator>,
    /// A native file or message dialog is open.
    pub(crate) modal_open: bool,
    /// Most recent message dialog shown.
    pub(crate) last_dialog: Option<Dialog>,
}

impl App {
    pub fn new(config: ConfigManager) -> Self {
        let orchestrator =
            Orchestrator::new(config.settings().clone(), Arc::new(SystemRunner::new()));
        Self {
            config,
            workflow: Workflow::new(),
            orchestrator: Arc::new(orchestrator),
            modal_open: false,
            last_dialog: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectAudio => self.browse_audio(),
            Message::AudioSelected(paths) => {
                self.handle_audio_selected(paths);
                Task::none()
            }
            Message::SelectVideo => self.browse_video(),
            Message::VideoSelected(path) => {
                self.handle_video_selected(path);
                Task::none()
            }
            Message::StartRun => self.start_run(),
            Message::OutputChosen(path) => self.handle_output_chosen(path),
            Message::OverwriteAnswered(path, overwrite) => {
                self.handle_overwrite_answered(path, overwrite)
            }
            Message::RunFinished(outcome) => self.handle_run_finished(outcome),
            Message::Tick => {
                self.workflow.tick();
                Task::none()
            }
            Message::DialogClosed => {
                if let Some(dialog) = &self.last_dialog {
                    tracing::debug!("Dialog closed: {}", dialog.title);
                }
                self.modal_open = false;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        main_window::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.workflow.is_running() {
            iced::time::every(PROGRESS_TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Buttons react only while idle and no dialog is open.
    pub fn controls_enabled(&self) -> bool {
        self.workflow.controls_enabled() && !self.modal_open
    }
}
