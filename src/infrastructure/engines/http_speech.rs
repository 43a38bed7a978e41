use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{SpeechEngine, SynthesisError, VoiceQuality};

/// Client for an HTTP text-to-speech engine returning raw mp3 bytes.
pub struct HttpSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpSpeechEngine {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/v1/speech", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechRequest<'a> {
    text: &'a str,
    voice_id: &'a str,
    engine: &'a str,
    output_format: &'a str,
}

#[async_trait]
impl SpeechEngine for HttpSpeechEngine {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        quality: VoiceQuality,
    ) -> Result<Bytes, SynthesisError> {
        tracing::debug!(voice = voice_id, quality = quality.as_str(), "Requesting synthesis");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SpeechRequest {
                text,
                voice_id,
                engine: quality.as_str(),
                output_format: "mp3",
            })
            .send()
            .await
            .map_err(|e| SynthesisError::EngineFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::EngineFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| SynthesisError::EngineFailed(format!("read body: {}", e)))
    }
}
