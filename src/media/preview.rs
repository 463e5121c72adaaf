/// Preview generation for the file the user picked
/// Reads the whole file into memory and builds a display handle from it
use iced::widget::image::Handle;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;
use tracing::debug;

use super::fit_to_handle;
use crate::error::SelectError;
use crate::state::data::{SelectedFile, FALLBACK_MIME};

/// Largest preview edge in pixels
pub const PREVIEW_SIZE: u32 = 300;

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Read a picked file and build its preview
pub async fn load_selected_file(path: PathBuf) -> Result<SelectedFile, SelectError> {
    // Spawn blocking because decoding is CPU-intensive
    task::spawn_blocking(move || load_selected_file_blocking(path))
        .await
        .map_err(|e| SelectError::TaskJoin(e.to_string()))?
}

/// Blocking version of file loading
pub fn load_selected_file_blocking(path: PathBuf) -> Result<SelectedFile, SelectError> {
    let bytes = std::fs::read(&path).map_err(|e| SelectError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let mime = mime_hint(&path);
    let preview = build_preview(&bytes);

    Ok(SelectedFile {
        path,
        file_name,
        mime,
        bytes: Arc::new(bytes),
        preview,
    })
}

/// MIME type suggested by the file extension
pub fn mime_hint(path: &Path) -> String {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

/// Build a preview handle for arbitrary bytes.
///
/// Decodable images are downscaled to `PREVIEW_SIZE`; anything else is
/// handed to the renderer untouched so a preview always exists.
pub fn build_preview(bytes: &[u8]) -> Handle {
    match image::load_from_memory(bytes) {
        Ok(img) => fit_to_handle(img, PREVIEW_SIZE),
        Err(e) => {
            debug!("Preview decode failed, using raw bytes: {}", e);
            Handle::from_bytes(bytes.to_vec())
        }
    }
}
