/// View layer
///
/// - `uploader.rs` - picker, preview, upload button and status
/// - `gallery.rs` - the uploaded images grid

pub mod gallery;
pub mod uploader;
