use std::sync::Arc;

use crate::application::ports::{SourceTag, TranslationEngine};
use crate::domain::LanguageCode;

/// Two-hop translation strategy over a one-hop engine.
///
/// Transcription engines routinely emit transliterated text for non-English
/// speech (Hindi words in Latin letters, say), which a direct source-tagged
/// translation mishandles. Routing such text through auto-detection with
/// English as a pivot is more robust, so the pipeline only translates
/// directly when the source is English or equals the target.
pub struct TranslationPipeline {
    engine: Arc<dyn TranslationEngine>,
}

impl TranslationPipeline {
    pub fn new(engine: Arc<dyn TranslationEngine>) -> Self {
        Self { engine }
    }

    /// Translates `text` into `target`. Infallible by policy: translation
    /// failure degrades to a sentinel string carried as the translated text,
    /// so a job never aborts here.
    pub async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> String {
        match self.primary(text, source, target).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    source = %source,
                    target = %target,
                    "Primary translation failed, retrying with auto-detection"
                );
                match self.engine.translate(text, SourceTag::Auto, target).await {
                    Ok(translated) => translated,
                    Err(e2) => {
                        tracing::error!(error = %e2, "Auto-detect retry failed");
                        format!("Translation error: {}", e2)
                    }
                }
            }
        }
    }

    async fn primary(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, crate::application::ports::TranslationError> {
        if source == target || source.is_english() {
            return self
                .engine
                .translate(text, SourceTag::Tagged(source.clone()), target)
                .await;
        }

        // Pivot: auto-detect to English first, then English to target.
        let intermediate = self
            .engine
            .translate(text, SourceTag::Auto, &LanguageCode::english())
            .await?;

        if target.is_english() {
            return Ok(intermediate);
        }

        self.engine
            .translate(
                &intermediate,
                SourceTag::Tagged(LanguageCode::english()),
                target,
            )
            .await
    }
}
