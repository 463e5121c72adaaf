/// Image service client module
///
/// The image service is the backend that stores uploads and serves them back.
/// This module holds:
/// - The records the service returns (this file)
/// - The `ImageService` trait the UI talks to (this file)
/// - The HTTP implementation (http.rs)
pub mod http;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ServiceError;
use crate::state::data::SelectedFile;

pub use http::HttpImageService;

/// Identifier the service assigns to an upload.
///
/// Opaque to the client: it is only compared and echoed back in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::Number(n) => write!(f, "{}", n),
            ImageId::Text(s) => f.write_str(s),
        }
    }
}

/// A single uploaded image as listed by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: ImageId,
    /// Original file name supplied at upload time
    pub file_name: String,
}

/// Operations the upload widget needs from the backend
#[async_trait]
pub trait ImageService: Send + Sync + fmt::Debug {
    /// Upload a file; returns the service's status text verbatim
    async fn upload(&self, file: &SelectedFile) -> Result<String, ServiceError>;

    /// List every stored image, in service order
    async fn list_images(&self) -> Result<Vec<ImageRecord>, ServiceError>;

    /// Fetch the raw bytes of one stored image
    async fn fetch_image(&self, id: &ImageId) -> Result<Vec<u8>, ServiceError>;
}
