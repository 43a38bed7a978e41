mod http_speech;
mod http_transcription;
mod http_translation;

pub use http_speech::HttpSpeechEngine;
pub use http_transcription::HttpTranscriptionEngine;
pub use http_translation::HttpTranslationEngine;
