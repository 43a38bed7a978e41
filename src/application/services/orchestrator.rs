use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AudioStore, AudioStoreError, JobStore, JobStoreError, SynthesisError, TranscriptionEngine,
    TranscriptionError, TranscriptionHandle, TranscriptionPoll,
};
use crate::application::services::{SpeechService, TranslationPipeline};
use crate::domain::{JobId, JobStatus, LanguageCode, StorageKey, TranslationJob};

pub const TIMEOUT_MESSAGE: &str =
    "Processing timeout. Please try again with a shorter audio clip.";

const EMPTY_TRANSCRIPT_TEXT: &str = "No speech detected in the audio";

#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Hard ceiling on status polls per job. Bounds external-engine load and
    /// guarantees termination even if the engine never completes.
    pub check_limit: u32,
    /// Audio at or above this size skips the synchronous fast path.
    pub sync_threshold_bytes: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            check_limit: 15,
            sync_threshold_bytes: 50_000,
        }
    }
}

/// Final artifact of a completed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTranslation {
    pub original_text: String,
    pub translated_text: String,
    pub audio_url: String,
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Fast path: the whole pipeline ran synchronously, no job to poll.
    Immediate(CompletedTranslation),
    /// Async path: transcription was kicked off, poll with the job id.
    Accepted { job_id: JobId },
}

#[derive(Debug)]
pub enum PollOutcome {
    Processing { job_id: JobId, message: String },
    Completed { job_id: JobId, result: CompletedTranslation },
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    /// Stored failure replayed on polls of a terminal `Failed` job.
    #[error("{0}")]
    JobFailed(String),
    #[error("Processing timeout. Please try again with a shorter audio clip.")]
    Timeout,
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("job store: {0}")]
    Store(JobStoreError),
    #[error("transcription engine: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("audio store: {0}")]
    AudioStore(#[from] AudioStoreError),
}

/// The job state machine. Creates jobs, advances them on each poll, applies
/// timeout and fallback policy, and persists every transition. Holds no
/// state of its own between invocations; the job store is the single source
/// of truth.
pub struct JobOrchestrator {
    store: Arc<dyn JobStore>,
    audio_store: Arc<dyn AudioStore>,
    transcriber: Arc<dyn TranscriptionEngine>,
    pipeline: TranslationPipeline,
    speech: SpeechService,
    config: OrchestratorConfig,
}

impl JobOrchestrator {
    pub fn new(
        store: Arc<dyn JobStore>,
        audio_store: Arc<dyn AudioStore>,
        transcriber: Arc<dyn TranscriptionEngine>,
        pipeline: TranslationPipeline,
        speech: SpeechService,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            store,
            audio_store,
            transcriber,
            pipeline,
            speech,
            config,
        }
    }

    /// Accepts an upload and either resolves it synchronously (short audio)
    /// or starts an asynchronous transcription job.
    pub async fn submit(
        &self,
        audio: Bytes,
        source_language: &str,
        target_language: &str,
    ) -> Result<SubmissionOutcome, OrchestratorError> {
        let source = LanguageCode::normalize(source_language);
        let target = LanguageCode::normalize(target_language);
        let job_id = JobId::new();
        let audio_key = StorageKey::input_audio(job_id);

        self.audio_store.put(&audio_key, audio.clone()).await?;

        if audio.len() < self.config.sync_threshold_bytes {
            match self.fast_path(job_id, &source, &target).await {
                Ok(result) => {
                    tracing::info!(job_id = %job_id, "Fast path completed synchronously");
                    return Ok(SubmissionOutcome::Immediate(result));
                }
                Err(e) => {
                    tracing::warn!(
                        job_id = %job_id,
                        error = %e,
                        "Fast path failed, falling back to async processing"
                    );
                }
            }
        }

        let job_name = format!("transcribe-{}", job_id);
        let handle = self
            .transcriber
            .submit(&job_name, &audio_key, source.transcribe_locale())
            .await?;

        let job = TranslationJob::new(job_id, source, target, handle.0, audio_key);
        self.store.put(&job).await.map_err(OrchestratorError::Store)?;

        tracing::info!(job_id = %job_id, job_name = %job_name, "Transcription job started");
        Ok(SubmissionOutcome::Accepted { job_id })
    }

    /// Advances the job one step. Terminal jobs replay their stored outcome
    /// without touching any engine.
    pub async fn poll(&self, job_id: JobId) -> Result<PollOutcome, OrchestratorError> {
        let mut job = match self.store.get(job_id).await {
            Ok(job) => job,
            Err(JobStoreError::NotFound(id)) => return Err(OrchestratorError::NotFound(id)),
            Err(e) => return Err(OrchestratorError::Store(e)),
        };

        match job.status {
            JobStatus::Completed => {
                return Ok(PollOutcome::Completed {
                    job_id,
                    result: Self::stored_result(&job),
                });
            }
            JobStatus::Failed => {
                let message = job.error.unwrap_or_else(|| "Job failed".to_string());
                return Err(OrchestratorError::JobFailed(message));
            }
            JobStatus::Transcribing => {}
        }

        // Increment and persist the counter before consulting the engine, so
        // the bound holds even if the engine call never returns.
        job.check_count += 1;
        if job.check_count > self.config.check_limit {
            job.fail(TIMEOUT_MESSAGE);
            self.store.put(&job).await.map_err(OrchestratorError::Store)?;
            tracing::warn!(job_id = %job_id, "Job exceeded poll limit");
            return Err(OrchestratorError::Timeout);
        }
        self.store.put(&job).await.map_err(OrchestratorError::Store)?;

        let handle = TranscriptionHandle(job.transcription_job_name.clone());
        match self.transcriber.status(&handle).await? {
            TranscriptionPoll::InProgress => Ok(PollOutcome::Processing {
                job_id,
                message: "Transcription in progress".to_string(),
            }),
            TranscriptionPoll::Completed(Ok(transcript)) => {
                let original = if transcript.trim().is_empty() {
                    EMPTY_TRANSCRIPT_TEXT.to_string()
                } else {
                    transcript
                };
                let translated = self
                    .pipeline
                    .translate(&original, &job.source_language, &job.target_language)
                    .await;
                self.finish(job, original, translated).await
            }
            TranscriptionPoll::Completed(Err(reason)) => {
                tracing::warn!(job_id = %job_id, error = %reason, "Transcript unavailable");
                self.finish_with_fallback(job).await
            }
            TranscriptionPoll::Failed => {
                tracing::warn!(job_id = %job_id, "Transcription engine reported failure");
                self.finish_with_fallback(job).await
            }
        }
    }

    async fn fast_path(
        &self,
        job_id: JobId,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<CompletedTranslation, SynthesisError> {
        let original = format!("Short message in {}", source);
        let translated = self.pipeline.translate(&original, source, target).await;
        let audio_url = self
            .speech
            .render(&translated, target, &StorageKey::output_audio(job_id))
            .await?;
        Ok(CompletedTranslation {
            original_text: original,
            translated_text: translated,
            audio_url,
        })
    }

    /// Degraded completion: the transcript is gone or the engine failed, but
    /// the job still resolves to something audible rather than a dead end.
    async fn finish_with_fallback(
        &self,
        job: TranslationJob,
    ) -> Result<PollOutcome, OrchestratorError> {
        let original = format!("Audio in {}", job.source_language);
        let translated = self
            .pipeline
            .translate(&original, &LanguageCode::english(), &job.target_language)
            .await;
        self.finish(job, original, translated).await
    }

    async fn finish(
        &self,
        mut job: TranslationJob,
        original: String,
        translated: String,
    ) -> Result<PollOutcome, OrchestratorError> {
        let job_id = job.id;
        let output_key = StorageKey::output_audio(job_id);

        let audio_url = match self
            .speech
            .render(&translated, &job.target_language, &output_key)
            .await
        {
            Ok(url) => url,
            Err(e) => {
                job.fail(e.to_string());
                self.store.put(&job).await.map_err(OrchestratorError::Store)?;
                tracing::error!(job_id = %job_id, error = %e, "Synthesis failed, job terminal");
                return Err(OrchestratorError::Synthesis(e));
            }
        };

        job.complete(original, translated, audio_url);
        self.store.put(&job).await.map_err(OrchestratorError::Store)?;
        tracing::info!(job_id = %job_id, checks = job.check_count, "Job completed");

        Ok(PollOutcome::Completed {
            job_id,
            result: Self::stored_result(&job),
        })
    }

    fn stored_result(job: &TranslationJob) -> CompletedTranslation {
        CompletedTranslation {
            original_text: job.original_text.clone().unwrap_or_default(),
            translated_text: job.translated_text.clone().unwrap_or_default(),
            audio_url: job.audio_url.clone().unwrap_or_default(),
        }
    }
}
