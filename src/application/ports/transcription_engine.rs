use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::StorageKey;

/// Handle returned by the transcription engine when a job is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptionHandle(pub String);

/// Result of a non-blocking status query against the transcription engine.
#[derive(Debug, Clone)]
pub enum TranscriptionPoll {
    InProgress,
    /// The engine finished. The inner result carries the transcript, or the
    /// reason it could not be fetched or parsed; the latter is a recoverable
    /// condition the caller maps to a fallback text, never a hard error.
    Completed(Result<String, TranscriptUnavailable>),
    Failed,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("transcript unavailable: {0}")]
pub struct TranscriptUnavailable(pub String);

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Starts an external transcription job against audio already in the
    /// blob store. Returns as soon as the job is accepted.
    async fn submit(
        &self,
        job_name: &str,
        audio_key: &StorageKey,
        locale: &str,
    ) -> Result<TranscriptionHandle, TranscriptionError>;

    async fn status(
        &self,
        handle: &TranscriptionHandle,
    ) -> Result<TranscriptionPoll, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("job submission failed: {0}")]
    SubmitFailed(String),
    #[error("status query failed: {0}")]
    StatusFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
