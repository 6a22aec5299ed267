//! Native message dialogs.

use std::path::PathBuf;

use iced::Task;

use avc_core::workflow::{Dialog, DialogLevel};

use crate::app::{App, Message};

impl App {
    /// Show a modal OK dialog; controls stay locked until it closes.
    pub fn show_dialog(&mut self, dialog: Dialog) -> Task<Message> {
        self.modal_open = true;
        self.last_dialog = Some(dialog.clone());

        Task::perform(
            async move {
                message_dialog(&dialog)
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show()
                    .await;
            },
            |_| Message::DialogClosed,
        )
    }

    /// Ask whether `path` may be overwritten.
    pub fn confirm_overwrite(&mut self, path: PathBuf) -> Task<Message> {
        self.modal_open = true;
        let dialog = Dialog::confirm_overwrite();
        self.last_dialog = Some(dialog.clone());

        Task::perform(
            async move {
                let answer = message_dialog(&dialog)
                    .set_buttons(rfd::MessageButtons::YesNo)
                    .show()
                    .await;
                (path, matches!(answer, rfd::MessageDialogResult::Yes))
            },
            |(path, overwrite)| Message::OverwriteAnswered(path, overwrite),
        )
    }
}

fn message_dialog(dialog: &Dialog) -> rfd::AsyncMessageDialog {
    let level = match dialog.level {
        DialogLevel::Info => rfd::MessageLevel::Info,
        DialogLevel::Warning => rfd::MessageLevel::Warning,
        DialogLevel::Error => rfd::MessageLevel::Error,
    };

    rfd::AsyncMessageDialog::new()
        .set_level(level)
        .set_title(&dialog.title)
        .set_description(&dialog.message)
}
