/// HTTP client for the image service REST API
///
/// Endpoints, relative to the configured base URL:
/// - `POST /api/images/upload` (multipart, field `file`) -> status text
/// - `GET /api/images` -> JSON array of `{ id, fileName }`
/// - `GET /api/images/{id}` -> raw image bytes
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use super::{ImageId, ImageRecord, ImageService};
use crate::error::ServiceError;
use crate::state::data::SelectedFile;

const API_PATH: [&str; 2] = ["api", "images"];
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct HttpImageService {
    http: Client,
    base: Url,
}

impl HttpImageService {
    pub fn new(base: Url) -> Result<Self, ServiceError> {
        if base.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(base.to_string()));
        }
        let http = Client::builder().build()?;
        Ok(Self { http, base })
    }

    /// Build `{base}/api/images/{extra...}`, keeping any path prefix on the base
    fn endpoint(&self, extra: &[&str]) -> Result<Url, ServiceError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ServiceError::InvalidUrl(self.base.to_string()))?;
            segments.pop_if_empty().extend(API_PATH).extend(extra);
        }
        Ok(url)
    }

    /// URL the service serves a stored image from
    pub fn image_url(&self, id: &ImageId) -> Result<Url, ServiceError> {
        let id = id.to_string();
        self.endpoint(&[id.as_str()])
    }
}

/// Turn a non-2xx response into `ServiceError::Status`, keeping the body
async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ImageService for HttpImageService {
    async fn upload(&self, file: &SelectedFile) -> Result<String, ServiceError> {
        let url = self.endpoint(&["upload"])?;
        if file.is_empty() {
            debug!("Uploading empty file {}", file.file_name);
        }
        debug!("POST {} ({} bytes)", url, file.len());

        let part = Part::bytes(file.bytes.as_ref().clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.http.post(url).multipart(form).send().await?;
        let body = check_status(response).await?.text().await?;
        Ok(body)
    }

    async fn list_images(&self) -> Result<Vec<ImageRecord>, ServiceError> {
        let url = self.endpoint(&[])?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let records = check_status(response)
            .await?
            .json::<Vec<ImageRecord>>()
            .await?;
        Ok(records)
    }

    async fn fetch_image(&self, id: &ImageId) -> Result<Vec<u8>, ServiceError> {
        let url = self.image_url(id)?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let bytes = check_status(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
