/// Async work behind each widget `Effect`
///
/// Each function talks to the image service and turns the outcome into the
/// `Event` the widget expects back. `perform` wraps them as iced tasks.
use iced::Task;
use std::sync::Arc;

use super::data::SelectedFile;
use super::widget::{Effect, Event};
use crate::media::thumbnail::decode_thumbnail;
use crate::service::{ImageId, ImageService};

/// Turn an effect into a task that reports back through `Event`s
pub fn perform(effect: Effect, service: Arc<dyn ImageService>) -> Task<Event> {
    match effect {
        Effect::Upload(file) => Task::perform(upload(service, file), |event| event),
        Effect::Refresh => Task::perform(refresh(service), |event| event),
        Effect::FetchThumbnails(ids) => Task::batch(
            ids.into_iter()
                .map(|id| Task::perform(thumbnail(service.clone(), id), |event| event)),
        ),
    }
}

pub async fn upload(service: Arc<dyn ImageService>, file: SelectedFile) -> Event {
    Event::UploadFinished(service.upload(&file).await)
}

pub async fn refresh(service: Arc<dyn ImageService>) -> Event {
    Event::ListLoaded(service.list_images().await)
}

pub async fn thumbnail(service: Arc<dyn ImageService>, id: ImageId) -> Event {
    let result = match service.fetch_image(&id).await {
        Ok(bytes) => decode_thumbnail(bytes).await,
        Err(e) => Err(e),
    };
    Event::ThumbnailLoaded(id, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::service::fake::FakeImageService;
    use crate::service::ImageRecord;
    use crate::state::widget::{UploadWidget, UPLOAD_FAILED};
    use iced::widget::image::Handle;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;
    use std::path::PathBuf;

    /// Run effects the way the app does, one at a time, until none are left
    async fn drive(widget: &mut UploadWidget, service: Arc<dyn ImageService>, first: Option<Effect>) {
        let mut pending: Vec<Effect> = first.into_iter().collect();
        while let Some(effect) = pending.pop() {
            let events = match effect {
                Effect::Upload(file) => vec![upload(service.clone(), file).await],
                Effect::Refresh => vec![refresh(service.clone()).await],
                Effect::FetchThumbnails(ids) => {
                    let mut events = Vec::new();
                    for id in ids {
                        events.push(thumbnail(service.clone(), id).await);
                    }
                    events
                }
            };
            for event in events {
                pending.extend(widget.update(event));
            }
        }
    }

    fn png_bytes() -> Vec<u8> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn selected(name: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(name),
            file_name: name.to_string(),
            mime: "image/png".to_string(),
            bytes: Arc::new(png_bytes()),
            preview: Handle::from_bytes(png_bytes()),
        }
    }

    fn listing() -> Vec<ImageRecord> {
        vec![
            ImageRecord { id: ImageId::Number(1), file_name: "a.png".to_string() },
            ImageRecord { id: ImageId::Number(2), file_name: "b.png".to_string() },
        ]
    }

    #[tokio::test]
    async fn successful_upload_refreshes_exactly_once() {
        let mut fake = FakeImageService::new(Ok("OK".to_string()), Ok(listing()));
        fake.images.insert(ImageId::Number(1), png_bytes());
        let fake = Arc::new(fake);
        let service: Arc<dyn ImageService> = fake.clone();

        let mut widget = UploadWidget::new();
        widget.update(Event::FileLoaded(Ok(selected("a.png"))));
        let effect = widget.update(Event::UploadRequested);
        drive(&mut widget, service, effect).await;

        assert_eq!(widget.status(), "OK");
        assert_eq!(fake.uploads(), vec!["a.png".to_string()]);
        assert_eq!(fake.list_calls(), 1);
        assert_eq!(widget.images(), listing().as_slice());
        assert_eq!(fake.fetch_calls(), 2);
        assert!(widget.thumbnail(&ImageId::Number(1)).is_some());
        // image 2 is missing on the service; the entry stays without a thumbnail
        assert!(widget.thumbnail(&ImageId::Number(2)).is_none());
    }

    #[tokio::test]
    async fn failed_upload_never_lists() {
        let fake = Arc::new(FakeImageService::new(
            Err(ServiceError::Transport("connection reset".to_string())),
            Ok(listing()),
        ));
        let service: Arc<dyn ImageService> = fake.clone();

        let mut widget = UploadWidget::new();
        widget.update(Event::FileLoaded(Ok(selected("a.png"))));
        let effect = widget.update(Event::UploadRequested);
        drive(&mut widget, service, effect).await;

        assert_eq!(widget.status(), UPLOAD_FAILED);
        assert_eq!(fake.list_calls(), 0);
        assert!(widget.images().is_empty());
    }

    #[tokio::test]
    async fn upload_without_selection_makes_no_calls() {
        let fake = Arc::new(FakeImageService::new(Ok("OK".to_string()), Ok(listing())));
        let service: Arc<dyn ImageService> = fake.clone();

        let mut widget = UploadWidget::new();
        let effect = widget.update(Event::UploadRequested);
        drive(&mut widget, service, effect).await;

        assert!(fake.uploads().is_empty());
        assert_eq!(fake.list_calls(), 0);
        assert_eq!(widget.status(), "");
    }

    #[tokio::test]
    async fn mount_loads_gallery_and_failure_clears_it() {
        let ok = Arc::new(FakeImageService::new(Ok("OK".to_string()), Ok(listing())));
        let mut widget = UploadWidget::new();
        let mount = widget.mount();
        drive(&mut widget, ok.clone(), Some(mount)).await;
        assert_eq!(widget.images().len(), 2);
        assert_eq!(ok.list_calls(), 1);

        let failing: Arc<dyn ImageService> = Arc::new(FakeImageService::new(
            Ok("OK".to_string()),
            Err(ServiceError::Status { status: 503, body: String::new() }),
        ));
        drive(&mut widget, failing, Some(Effect::Refresh)).await;
        assert!(widget.images().is_empty());
        assert_eq!(widget.status(), "");
    }
}
