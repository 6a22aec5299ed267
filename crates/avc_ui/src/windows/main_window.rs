//! Main window view.

use iced::widget::{button, column, container, progress_bar, text};
use iced::{Alignment, Element, Length};

use avc_core::workflow::PROGRESS_MAX;

use crate::app::{App, Message};
use crate::theme::{colors, font, size, spacing};

pub fn view(app: &App) -> Element<'_, Message> {
    let workflow = &app.workflow;
    let enabled = app.controls_enabled();

    let status = if workflow.is_running() {
        text(workflow.status_text())
            .size(font::STATUS)
            .color(colors::PROCESSING)
    } else {
        text(workflow.status_text()).size(font::STATUS)
    };

    let content = column![
        status,
        progress_bar(0.0..=PROGRESS_MAX, workflow.progress()),
        text(workflow.audio_label())
            .size(font::LABEL)
            .color(colors::TEXT_SECONDARY),
        action_button("Select Audio Files", Message::SelectAudio, enabled),
        text(workflow.video_label())
            .size(font::LABEL)
            .color(colors::TEXT_SECONDARY),
        action_button("Select Video File", Message::SelectVideo, enabled),
        action_button("Combine and Process", Message::StartRun, enabled),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn action_button(label: &str, message: Message, enabled: bool) -> Element<'_, Message> {
    button(container(text(label)).center_x(Length::Fill))
        .on_press_maybe(enabled.then_some(message))
        .padding(spacing::SM)
        .width(Length::Fixed(size::BUTTON_WIDTH))
        .into()
}
