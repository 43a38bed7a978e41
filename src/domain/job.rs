use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{JobId, JobStatus, LanguageCode, StorageKey};

/// One submitted audio-translation request, tracked from submission to a
/// terminal state. The stored record is the single source of truth between
/// polls and must round-trip through the job store without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationJob {
    pub id: JobId,
    pub status: JobStatus,
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
    /// Handle into the external transcription engine. Set once at creation.
    pub transcription_job_name: String,
    pub audio_key: StorageKey,
    /// Number of status polls issued so far. Monotonic; bounds total polling.
    pub check_count: u32,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationJob {
    pub fn new(
        id: JobId,
        source_language: LanguageCode,
        target_language: LanguageCode,
        transcription_job_name: String,
        audio_key: StorageKey,
    ) -> Self {
        Self {
            id,
            status: JobStatus::Transcribing,
            source_language,
            target_language,
            transcription_job_name,
            audio_key,
            check_count: 0,
            started_at: Utc::now(),
            original_text: None,
            translated_text: None,
            audio_url: None,
            completed_at: None,
            error: None,
        }
    }

    pub fn complete(&mut self, original_text: String, translated_text: String, audio_url: String) {
        self.status = JobStatus::Completed;
        self.original_text = Some(original_text);
        self.translated_text = Some(translated_text);
        self.audio_url = Some(audio_url);
        self.completed_at = Some(Utc::now());
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.status = JobStatus::Failed;
        self.error = Some(error.into());
    }
}
