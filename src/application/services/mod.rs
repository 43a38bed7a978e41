mod orchestrator;
mod speech_service;
mod translation_pipeline;

pub use orchestrator::{
    CompletedTranslation, JobOrchestrator, OrchestratorConfig, OrchestratorError, PollOutcome,
    SubmissionOutcome, TIMEOUT_MESSAGE,
};
pub use speech_service::SpeechService;
pub use translation_pipeline::TranslationPipeline;
