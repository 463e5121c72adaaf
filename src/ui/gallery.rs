/// Grid of uploaded images, in the order the service listed them
use iced::widget::image::Handle;
use iced::widget::{column, container, text, Image};
use iced::{Alignment, ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::media::thumbnail::THUMBNAIL_SIZE;
use crate::service::ImageRecord;
use crate::state::widget::UploadWidget;
use crate::Message;

pub fn view(widget: &UploadWidget) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = widget
        .images()
        .iter()
        .map(|record| card(record, widget.thumbnail(&record.id)))
        .collect();

    let grid: Element<'_, Message> = if cards.is_empty() {
        text("No images uploaded yet.").size(14).into()
    } else {
        Wrap::with_elements(cards)
            .spacing(Pixels(16.0))
            .line_spacing(Pixels(16.0))
            .into()
    };

    column![text("Uploaded Images").size(24), grid]
        .spacing(16)
        .into()
}

/// One bordered gallery entry: thumbnail (once loaded) above the file name
fn card<'a>(record: &'a ImageRecord, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    let size = Length::Fixed(THUMBNAIL_SIZE as f32);

    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(size)
            .height(size)
            .content_fit(ContentFit::ScaleDown)
            .into(),
        None => container(text("…").size(24))
            .width(size)
            .height(size)
            .center_x(size)
            .center_y(size)
            .into(),
    };

    container(
        column![picture, text(&record.file_name).size(14)]
            .spacing(8)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .style(container::bordered_box)
    .into()
}
