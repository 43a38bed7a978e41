use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{JobId, TranslationJob};

/// In-process job store for tests and local development.
#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<HashMap<JobId, TranslationJob>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn put(&self, job: &TranslationJob) -> Result<(), JobStoreError> {
        self.jobs.write().await.insert(job.id, job.clone());
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<TranslationJob, JobStoreError> {
        self.jobs
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(JobStoreError::NotFound(id))
    }
}
