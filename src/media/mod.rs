/// Local image decoding module
///
/// This module handles:
/// - Reading a picked file and building its preview (preview.rs)
/// - Turning downloaded gallery images into thumbnails (thumbnail.rs)
///
/// Decoding is CPU-bound, so both run on tokio's blocking pool.

pub mod preview;
pub mod thumbnail;

use iced::widget::image::Handle;
use image::DynamicImage;

/// Downscale an image to fit inside a `max` x `max` box and wrap it for iced.
/// Images that already fit are kept at their original size.
pub(crate) fn fit_to_handle(img: DynamicImage, max: u32) -> Handle {
    let fitted = if img.width() > max || img.height() > max {
        img.thumbnail(max, max)
    } else {
        img
    };

    let rgba = fitted.to_rgba8();
    let (width, height) = rgba.dimensions();
    Handle::from_rgba(width, height, rgba.into_raw())
}
