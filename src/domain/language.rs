use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-letter language code restricted to the set the transcription engine
/// accepts. Unsupported codes are silently normalized to English rather than
/// rejected, matching the engine-side remap configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

/// Language codes the transcription engine supports, paired with the locale
/// tag it expects for each.
const SUPPORTED: &[(&str, &str)] = &[
    ("en", "en-US"),
    ("es", "es-US"),
    ("de", "de-DE"),
    ("it", "it-IT"),
    ("pt", "pt-BR"),
    ("ja", "ja-JP"),
    ("ko", "ko-KR"),
    ("zh", "zh-CN"),
    ("ar", "ar-SA"),
    ("hi", "hi-IN"),
    ("ru", "ru-RU"),
    ("nl", "nl-NL"),
    ("tr", "tr-TR"),
    ("pl", "pl-PL"),
    ("sv", "sv-SE"),
    ("da", "da-DK"),
];

impl LanguageCode {
    pub const ENGLISH: &'static str = "en";

    /// Normalize a client-supplied code, falling back to English when the
    /// engine does not support it.
    pub fn normalize(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        if SUPPORTED.iter().any(|(c, _)| *c == code) {
            Self(code)
        } else {
            Self(Self::ENGLISH.to_string())
        }
    }

    pub fn english() -> Self {
        Self(Self::ENGLISH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == Self::ENGLISH
    }

    /// Locale tag the transcription engine expects for this code.
    pub fn transcribe_locale(&self) -> &'static str {
        SUPPORTED
            .iter()
            .find(|(c, _)| *c == self.0)
            .map(|(_, locale)| *locale)
            .unwrap_or("en-US")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
