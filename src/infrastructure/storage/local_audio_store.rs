use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StorageKey;

/// Filesystem-backed audio store. "Presigned" URLs point at a public base
/// URL (a static file server fronting the same directory) with an expiry
/// timestamp appended; real signing belongs to an S3-compatible backend.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
    public_base_url: String,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf, public_base_url: String) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AudioStore for LocalAudioStore {
    async fn put(&self, key: &StorageKey, data: Bytes) -> Result<(), AudioStoreError> {
        let path = StorePath::from(key.as_str());
        self.inner
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| AudioStoreError::UploadFailed(e.to_string()))?;
        Ok(())
    }

    async fn presigned_url(
        &self,
        key: &StorageKey,
        expires_in: Duration,
    ) -> Result<String, AudioStoreError> {
        let path = StorePath::from(key.as_str());
        self.inner
            .head(&path)
            .await
            .map_err(|e| AudioStoreError::NotFound(e.to_string()))?;

        let expires = Utc::now().timestamp() + expires_in.as_secs() as i64;
        Ok(format!(
            "{}/{}?expires={}",
            self.public_base_url,
            key.as_str(),
            expires
        ))
    }
}
