use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StorageKey;

/// Blob storage for source uploads and synthesized output audio.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn put(&self, key: &StorageKey, data: Bytes) -> Result<(), AudioStoreError>;

    /// Time-limited URL a client can fetch the object from without
    /// credentials.
    async fn presigned_url(
        &self,
        key: &StorageKey,
        expires_in: Duration,
    ) -> Result<String, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("signing failed: {0}")]
    SigningFailed(String),
}
