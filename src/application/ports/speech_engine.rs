use async_trait::async_trait;
use bytes::Bytes;

/// Voice quality tier. Neural is attempted first; standard is the fallback
/// when the neural engine rejects the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceQuality {
    Neural,
    Standard,
}

impl VoiceQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceQuality::Neural => "neural",
            VoiceQuality::Standard => "standard",
        }
    }
}

#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        quality: VoiceQuality,
    ) -> Result<Bytes, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis failed: {0}")]
    EngineFailed(String),
    #[error("audio upload failed: {0}")]
    StoreFailed(String),
}
