use iced::widget::image::Handle;
use tokio::task;

use super::fit_to_handle;
use crate::error::ServiceError;

/// Size of gallery thumbnails (square bounding box)
pub const THUMBNAIL_SIZE: u32 = 150;

/// Decode downloaded image bytes into a gallery thumbnail
pub async fn decode_thumbnail(bytes: Vec<u8>) -> Result<Handle, ServiceError> {
    task::spawn_blocking(move || decode_thumbnail_blocking(&bytes))
        .await
        .map_err(|e| ServiceError::Decode(format!("Task join error: {}", e)))?
}

/// Blocking version of thumbnail decoding
pub fn decode_thumbnail_blocking(bytes: &[u8]) -> Result<Handle, ServiceError> {
    let img = image::load_from_memory(bytes).map_err(|e| ServiceError::Decode(e.to_string()))?;
    Ok(fit_to_handle(img, THUMBNAIL_SIZE))
}
