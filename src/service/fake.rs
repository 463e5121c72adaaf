//! In-memory `ImageService` that records every call

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ImageId, ImageRecord, ImageService};
use crate::error::ServiceError;
use crate::state::data::SelectedFile;

#[derive(Debug)]
pub struct FakeImageService {
    pub upload_result: Result<String, ServiceError>,
    pub list_result: Result<Vec<ImageRecord>, ServiceError>,
    pub images: HashMap<ImageId, Vec<u8>>,
    pub uploaded: Mutex<Vec<String>>,
    pub list_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
}

impl FakeImageService {
    pub fn new(
        upload_result: Result<String, ServiceError>,
        list_result: Result<Vec<ImageRecord>, ServiceError>,
    ) -> Self {
        Self {
            upload_result,
            list_result,
            images: HashMap::new(),
            uploaded: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn uploads(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageService for FakeImageService {
    async fn upload(&self, file: &SelectedFile) -> Result<String, ServiceError> {
        self.uploaded.lock().unwrap().push(file.file_name.clone());
        self.upload_result.clone()
    }

    async fn list_images(&self) -> Result<Vec<ImageRecord>, ServiceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_result.clone()
    }

    async fn fetch_image(&self, id: &ImageId) -> Result<Vec<u8>, ServiceError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.images.get(id).cloned().ok_or(ServiceError::Status {
            status: 404,
            body: String::new(),
        })
    }
}
