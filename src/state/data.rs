/// Shared data structures for the widget state
///
/// These structs represent the data model that flows between
/// the file picker, the service client and the UI layer.
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::sync::Arc;

/// MIME hint used when the extension doesn't name an image format
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// A file the user picked, plus its local preview
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// Where the file was read from
    pub path: PathBuf,
    /// File name only (e.g., "holiday.png"), sent as the multipart file name
    pub file_name: String,
    /// MIME hint derived from the extension
    pub mime: String,
    /// File contents, shared so messages can be cloned cheaply
    pub bytes: Arc<Vec<u8>>,
    /// In-memory image handle shown before the upload happens
    pub preview: Handle,
}

impl SelectedFile {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
