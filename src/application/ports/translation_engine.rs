use async_trait::async_trait;

use crate::domain::LanguageCode;

/// Source-language tag for a single translation hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceTag {
    Tagged(LanguageCode),
    /// Let the engine detect the source language. Used for transliterated
    /// transcripts where the tagged language would mislead the engine.
    Auto,
}

/// One-hop text translation. Pivot routing is the pipeline's concern, not
/// the engine's.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: SourceTag,
        target: &LanguageCode,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unsupported language pair: {0} -> {1}")]
    UnsupportedPair(String, String),
}
