/// The upload widget: selected file, preview, gallery listing and status line
///
/// All state changes go through `UploadWidget::update`, which never performs
/// I/O itself. Work that has to leave the UI thread is returned as an
/// `Effect` and its result comes back later as another `Event`.
use iced::widget::image::Handle;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::data::SelectedFile;
use crate::error::{SelectError, ServiceError};
use crate::service::{ImageId, ImageRecord};

/// Status shown after any failed upload, whatever the cause
pub const UPLOAD_FAILED: &str = "Upload failed!";

/// Inputs to the widget: user actions and completed background work
#[derive(Debug, Clone)]
pub enum Event {
    /// A picked file has been read from disk (or failed to)
    FileLoaded(Result<SelectedFile, SelectError>),
    /// User pressed "Upload"
    UploadRequested,
    /// The upload request finished
    UploadFinished(Result<String, ServiceError>),
    /// The gallery listing request finished
    ListLoaded(Result<Vec<ImageRecord>, ServiceError>),
    /// One gallery thumbnail finished downloading and decoding
    ThumbnailLoaded(ImageId, Result<Handle, ServiceError>),
}

/// Background work the widget asks for
#[derive(Debug, Clone)]
pub enum Effect {
    Upload(SelectedFile),
    Refresh,
    FetchThumbnails(Vec<ImageId>),
}

/// Coarse widget phase, derived from the state fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Uploading,
}

#[derive(Debug, Default)]
pub struct UploadWidget {
    selected: Option<SelectedFile>,
    images: Vec<ImageRecord>,
    thumbnails: HashMap<ImageId, Handle>,
    status: String,
    uploading: bool,
}

impl UploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effect to run when the widget is first shown: load the gallery once
    pub fn mount(&self) -> Effect {
        Effect::Refresh
    }

    /// Handle an event and return the follow-up work, if any
    pub fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::FileLoaded(Ok(file)) => {
                self.select_file(file);
                None
            }
            Event::FileLoaded(Err(err)) => {
                warn!("⚠️  Could not load selected file: {}", err);
                None
            }
            Event::UploadRequested => self.upload(),
            Event::UploadFinished(result) => self.finish_upload(result),
            Event::ListLoaded(result) => self.apply_listing(result),
            Event::ThumbnailLoaded(id, result) => {
                self.apply_thumbnail(id, result);
                None
            }
        }
    }

    /// Replace the current selection; the previous preview is dropped with it
    pub fn select_file(&mut self, file: SelectedFile) {
        info!(
            "🖼️  Selected {} ({} bytes, {})",
            file.file_name,
            file.len(),
            file.mime
        );
        self.selected = Some(file);
    }

    /// Start uploading the selected file.
    ///
    /// Does nothing without a selection or while an upload is in flight.
    pub fn upload(&mut self) -> Option<Effect> {
        if self.uploading {
            debug!("Upload already in flight, ignoring request");
            return None;
        }
        let file = self.selected.clone()?;

        info!("⏫ Uploading {}", file.file_name);
        self.uploading = true;
        Some(Effect::Upload(file))
    }

    fn finish_upload(&mut self, result: Result<String, ServiceError>) -> Option<Effect> {
        self.uploading = false;
        match result {
            Ok(body) => {
                info!("✅ Upload complete: {}", body);
                self.status = body;
                Some(Effect::Refresh)
            }
            Err(err) => {
                warn!("⚠️  Upload failed: {}", err);
                self.status = UPLOAD_FAILED.to_string();
                None
            }
        }
    }

    /// Replace the gallery with a listing result; a failure empties it
    fn apply_listing(&mut self, result: Result<Vec<ImageRecord>, ServiceError>) -> Option<Effect> {
        match result {
            Ok(images) => {
                debug!("📊 Gallery refreshed with {} images", images.len());
                self.images = images;
            }
            Err(err) => {
                warn!("⚠️  Could not list images: {}", err);
                self.images.clear();
            }
        }

        let images = &self.images;
        self.thumbnails
            .retain(|id, _| images.iter().any(|record| &record.id == id));

        let missing: Vec<ImageId> = self
            .images
            .iter()
            .map(|record| record.id.clone())
            .filter(|id| !self.thumbnails.contains_key(id))
            .collect();

        if missing.is_empty() {
            None
        } else {
            Some(Effect::FetchThumbnails(missing))
        }
    }

    fn apply_thumbnail(&mut self, id: ImageId, result: Result<Handle, ServiceError>) {
        match result {
            Ok(handle) => {
                if self.images.iter().any(|record| record.id == id) {
                    self.thumbnails.insert(id, handle);
                }
            }
            Err(err) => warn!("⚠️  Could not load thumbnail for image {}: {}", id, err),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.uploading {
            Phase::Uploading
        } else if self.selected.is_some() {
            Phase::FileSelected
        } else {
            Phase::Idle
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn thumbnail(&self, id: &ImageId) -> Option<&Handle> {
        self.thumbnails.get(id)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }
}
