use async_trait::async_trait;

use crate::domain::{JobId, TranslationJob};

/// Durable key-value persistence of job records, addressed by job id.
///
/// Implementations must be strongly consistent for a single job across
/// sequential calls from the same caller: a `get` issued after a `put` for
/// the same id returns the record that was written. No multi-job
/// transactional guarantees are required.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Persists the record, overwriting any existing record for the same id.
    async fn put(&self, job: &TranslationJob) -> Result<(), JobStoreError>;

    async fn get(&self, id: JobId) -> Result<TranslationJob, JobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("store backend failed: {0}")]
    Backend(String),
}
