use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{AudioStore, SpeechEngine, SynthesisError, VoiceQuality};
use crate::domain::{LanguageCode, StorageKey};

/// Per-language voice assignment for the speech engine.
const VOICES: &[(&str, &str)] = &[
    ("en", "Joanna"),
    ("es", "Lupe"),
    ("de", "Vicki"),
    ("it", "Bianca"),
    ("pt", "Camila"),
    ("ja", "Takumi"),
    ("ko", "Seoyeon"),
    ("zh", "Zhiyu"),
    ("ar", "Hala"),
    ("hi", "Aditi"),
    ("ru", "Tatyana"),
    ("nl", "Laura"),
    ("tr", "Filiz"),
    ("pl", "Ewa"),
    ("sv", "Astrid"),
    ("da", "Naja"),
];

const DEFAULT_VOICE: &str = "Joanna";

/// Turns final text into stored audio and hands back a fetchable URL.
///
/// Synthesis is the one step with no degraded fallback: if both quality
/// tiers fail there is nothing audible to deliver, and the error is
/// terminal for the job.
pub struct SpeechService {
    engine: Arc<dyn SpeechEngine>,
    audio_store: Arc<dyn AudioStore>,
    url_ttl: Duration,
}

impl SpeechService {
    pub fn new(
        engine: Arc<dyn SpeechEngine>,
        audio_store: Arc<dyn AudioStore>,
        url_ttl: Duration,
    ) -> Self {
        Self {
            engine,
            audio_store,
            url_ttl,
        }
    }

    pub fn voice_for(language: &LanguageCode) -> &'static str {
        VOICES
            .iter()
            .find(|(code, _)| *code == language.as_str())
            .map(|(_, voice)| *voice)
            .unwrap_or(DEFAULT_VOICE)
    }

    /// Synthesizes `text` in the given language, stores the mp3 at `key`,
    /// and returns a presigned URL for it. Tries the neural tier first and
    /// falls back to standard once.
    pub async fn render(
        &self,
        text: &str,
        language: &LanguageCode,
        key: &StorageKey,
    ) -> Result<String, SynthesisError> {
        let voice = Self::voice_for(language);

        let audio = match self
            .engine
            .synthesize(text, voice, VoiceQuality::Neural)
            .await
        {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    voice = voice,
                    "Neural synthesis failed, retrying with standard engine"
                );
                self.engine
                    .synthesize(text, voice, VoiceQuality::Standard)
                    .await?
            }
        };

        self.audio_store
            .put(key, audio)
            .await
            .map_err(|e| SynthesisError::StoreFailed(e.to_string()))?;

        self.audio_store
            .presigned_url(key, self.url_ttl)
            .await
            .map_err(|e| SynthesisError::StoreFailed(e.to_string()))
    }
}
