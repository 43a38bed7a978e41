mod audio_store;
mod job_store;
mod speech_engine;
mod transcription_engine;
mod translation_engine;

pub use audio_store::{AudioStore, AudioStoreError};
pub use job_store::{JobStore, JobStoreError};
pub use speech_engine::{SpeechEngine, SynthesisError, VoiceQuality};
pub use transcription_engine::{
    TranscriptionEngine, TranscriptionError, TranscriptionHandle, TranscriptionPoll,
    TranscriptUnavailable,
};
pub use translation_engine::{SourceTag, TranslationEngine, TranslationError};
