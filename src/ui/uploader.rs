/// File picker, local preview, upload button and status line
use iced::widget::{button, column, row, text, Column, Image};
use iced::{Alignment, ContentFit, Element, Length};

use crate::media::preview::PREVIEW_SIZE;
use crate::state::widget::{Event, Phase, UploadWidget};
use crate::Message;

pub fn view(widget: &UploadWidget) -> Element<'_, Message> {
    let chosen = widget
        .selected()
        .map(|file| file.file_name.as_str())
        .unwrap_or("No file chosen");

    let picker = row![
        button("Choose Image")
            .on_press(Message::PickFile)
            .padding(10),
        text(chosen).size(14),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut content: Column<Message> = column![text("Image Upload").size(32), picker]
        .spacing(16)
        .align_x(Alignment::Center);

    if let Some(file) = widget.selected() {
        let size = Length::Fixed(PREVIEW_SIZE as f32);
        let label = match widget.phase() {
            Phase::Uploading => "Uploading...",
            _ => "Upload",
        };

        content = content
            .push(
                Image::new(file.preview.clone())
                    .width(size)
                    .height(size)
                    .content_fit(ContentFit::ScaleDown),
            )
            .push(
                button(label)
                    .on_press_maybe(
                        (!widget.is_uploading()).then_some(Message::Widget(Event::UploadRequested)),
                    )
                    .padding(10),
            );
    }

    if !widget.status().is_empty() {
        content = content.push(text(widget.status()).size(16));
    }

    content.into()
}
