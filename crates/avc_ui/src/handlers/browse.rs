//! File browsing handlers.

use std::path::{Path, PathBuf};

use iced::Task;

use avc_core::config::ConfigSection;

use crate::app::{App, FolderType, Message};

impl App {
    /// Browse for the audio tracks (multi-select, in picker order).
    pub fn browse_audio(&mut self) -> Task<Message> {
        self.modal_open = true;
        let dialog = self.file_dialog("Select Audio Files", FolderType::Audio);

        Task::perform(
            async move {
                dialog
                    .pick_files()
                    .await
                    .map(|files| {
                        files
                            .iter()
                            .map(|f| f.path().to_path_buf())
                            .collect::<Vec<PathBuf>>()
                    })
                    .unwrap_or_default()
            },
            Message::AudioSelected,
        )
    }

    /// Browse for the video file.
    pub fn browse_video(&mut self) -> Task<Message> {
        self.modal_open = true;
        let dialog = self.file_dialog("Select a Video File", FolderType::Video);

        Task::perform(
            async move { dialog.pick_file().await.map(|f| f.path().to_path_buf()) },
            Message::VideoSelected,
        )
    }

    /// Ask where the combined video goes.
    pub fn browse_output(&mut self) -> Task<Message> {
        self.modal_open = true;
        let dialog = self.file_dialog("Save Output Video", FolderType::Output);

        Task::perform(
            async move { dialog.save_file().await.map(|f| f.path().to_path_buf()) },
            Message::OutputChosen,
        )
    }

    pub fn handle_audio_selected(&mut self, paths: Vec<PathBuf>) {
        self.modal_open = false;
        if let Some(first) = paths.first() {
            tracing::info!("Selected {} audio file(s)", paths.len());
            self.remember_folder(FolderType::Audio, first);
        }
        self.workflow.select_audio(paths);
    }

    pub fn handle_video_selected(&mut self, path: Option<PathBuf>) {
        self.modal_open = false;
        if let Some(ref p) = path {
            tracing::info!("Selected video: {}", p.display());
            self.remember_folder(FolderType::Video, p);
        }
        self.workflow.select_video(path);
    }

    /// Store the parent folder of `file` so the next dialog opens there.
    pub fn remember_folder(&mut self, folder_type: FolderType, file: &Path) {
        let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return;
        };
        let folder = parent.to_string_lossy().to_string();

        let paths = &mut self.config.settings_mut().paths;
        let slot = match folder_type {
            FolderType::Audio => &mut paths.last_audio_folder,
            FolderType::Video => &mut paths.last_video_folder,
            FolderType::Output => &mut paths.last_output_folder,
        };
        if *slot == folder {
            return;
        }
        *slot = folder;

        if let Err(e) = self.config.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to save remembered folder: {}", e);
        }
    }

    fn file_dialog(&self, title: &str, folder_type: FolderType) -> rfd::AsyncFileDialog {
        let settings = self.config.settings();
        let (ext, folder) = match folder_type {
            FolderType::Audio => (
                &settings.encoding.audio_extension,
                &settings.paths.last_audio_folder,
            ),
            FolderType::Video => (
                &settings.encoding.video_extension,
                &settings.paths.last_video_folder,
            ),
            FolderType::Output => (
                &settings.encoding.output_extension,
                &settings.paths.last_output_folder,
            ),
        };
        let ext = ext.trim_start_matches('.');

        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title(title)
            .add_filter(format!("{} files", ext.to_uppercase()), &[ext]);

        if !folder.is_empty() && Path::new(folder).is_dir() {
            dialog = dialog.set_directory(folder);
        }
        dialog
    }
}
