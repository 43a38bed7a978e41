use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SourceTag, TranslationEngine, TranslationError};
use crate::domain::LanguageCode;

/// Client for an HTTP text-translation engine. `"auto"` as the source code
/// asks the engine to detect the language itself.
pub struct HttpTranslationEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpTranslationEngine {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/v1/translate", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    text: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[async_trait]
impl TranslationEngine for HttpTranslationEngine {
    async fn translate(
        &self,
        text: &str,
        source: SourceTag,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let source_code = match &source {
            SourceTag::Tagged(code) => code.as_str(),
            SourceTag::Auto => "auto",
        };

        tracing::debug!(source = source_code, target = %target, "Requesting translation");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&TranslateRequest {
                text,
                source_language_code: source_code,
                target_language_code: target.as_str(),
            })
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(format!("parse response: {}", e)))?;

        Ok(parsed.translated_text)
    }
}
