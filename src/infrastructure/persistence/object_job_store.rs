use std::sync::Arc;

use async_trait::async_trait;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{JobId, StorageKey, TranslationJob};

/// Job store over any `object_store` backend, one JSON document per job at
/// `jobs/{id}.json`. Every `put` overwrites the whole record, which is what
/// the orchestrator expects; reads after writes against the same backend are
/// consistent for local filesystems and S3-compatible stores alike.
pub struct ObjectJobStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectJobStore {
    pub fn new(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }

    fn path_for(id: JobId) -> StorePath {
        StorePath::from(StorageKey::job_record(id).as_str())
    }
}

#[async_trait]
impl JobStore for ObjectJobStore {
    async fn put(&self, job: &TranslationJob) -> Result<(), JobStoreError> {
        let body = serde_json::to_vec(job)
            .map_err(|e| JobStoreError::Serialization(e.to_string()))?;
        self.inner
            .put(&Self::path_for(job.id), PutPayload::from(body))
            .await
            .map_err(|e| JobStoreError::Backend(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<TranslationJob, JobStoreError> {
        let result = match self.inner.get(&Self::path_for(id)).await {
            Ok(r) => r,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(JobStoreError::NotFound(id));
            }
            Err(e) => return Err(JobStoreError::Backend(e.to_string())),
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| JobStoreError::Backend(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| JobStoreError::Serialization(e.to_string()))
    }
}
