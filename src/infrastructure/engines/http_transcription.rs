use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    TranscriptionEngine, TranscriptionError, TranscriptionHandle, TranscriptionPoll,
    TranscriptUnavailable,
};
use crate::domain::StorageKey;

/// Client for an HTTP transcription engine with an async job API: one call
/// starts a job against audio already in the blob store, a second polls it.
pub struct HttpTranscriptionEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTranscriptionEngine {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest<'a> {
    job_name: &'a str,
    media_key: &'a str,
    language_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    status: String,
    transcript: Option<String>,
}

#[async_trait]
impl TranscriptionEngine for HttpTranscriptionEngine {
    async fn submit(
        &self,
        job_name: &str,
        audio_key: &StorageKey,
        locale: &str,
    ) -> Result<TranscriptionHandle, TranscriptionError> {
        let url = format!("{}/v1/jobs", self.base_url);
        tracing::debug!(job_name = job_name, locale = locale, "Submitting transcription job");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&SubmitRequest {
                job_name,
                media_key: audio_key.as_str(),
                language_code: locale,
            })
            .send()
            .await
            .map_err(|e| TranscriptionError::SubmitFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::SubmitFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        Ok(TranscriptionHandle(job_name.to_string()))
    }

    async fn status(
        &self,
        handle: &TranscriptionHandle,
    ) -> Result<TranscriptionPoll, TranscriptionError> {
        let url = format!("{}/v1/jobs/{}", self.base_url, handle.0);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::StatusFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::StatusFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: StatusResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        match parsed.status.as_str() {
            "COMPLETED" => Ok(TranscriptionPoll::Completed(match parsed.transcript {
                Some(text) => Ok(text),
                // The engine finished but the transcript body is missing.
                // Recoverable for the caller, not an error here.
                None => Err(TranscriptUnavailable(
                    "engine completed without a transcript body".to_string(),
                )),
            })),
            "FAILED" => Ok(TranscriptionPoll::Failed),
            _ => Ok(TranscriptionPoll::InProgress),
        }
    }
}
