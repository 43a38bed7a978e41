use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use voxrelay::application::services::{
    JobOrchestrator, OrchestratorConfig, SpeechService, TranslationPipeline,
};
use voxrelay::infrastructure::engines::{
    HttpSpeechEngine, HttpTranscriptionEngine, HttpTranslationEngine,
};
use voxrelay::infrastructure::observability::{init_tracing, TracingConfig};
use voxrelay::infrastructure::persistence::ObjectJobStore;
use voxrelay::infrastructure::storage::LocalAudioStore;
use voxrelay::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let base_path = PathBuf::from(&settings.storage.base_path);
    let audio_store = Arc::new(LocalAudioStore::new(
        base_path.clone(),
        settings.storage.public_base_url.clone(),
    )?);

    let record_fs = object_store::local::LocalFileSystem::new_with_prefix(&base_path)?;
    let job_store = Arc::new(ObjectJobStore::new(Arc::new(record_fs)));

    let transcriber = Arc::new(HttpTranscriptionEngine::new(
        &settings.engines.transcription_url,
        &settings.engines.api_key,
    ));
    let translator = Arc::new(HttpTranslationEngine::new(
        &settings.engines.translation_url,
        &settings.engines.api_key,
    ));
    let speech_engine = Arc::new(HttpSpeechEngine::new(
        &settings.engines.speech_url,
        &settings.engines.api_key,
    ));

    let pipeline = TranslationPipeline::new(translator);
    let speech = SpeechService::new(
        speech_engine,
        Arc::clone(&audio_store) as Arc<dyn voxrelay::application::ports::AudioStore>,
        Duration::from_secs(settings.jobs.audio_url_ttl_secs),
    );

    let orchestrator = Arc::new(JobOrchestrator::new(
        job_store,
        audio_store,
        transcriber,
        pipeline,
        speech,
        OrchestratorConfig {
            check_limit: settings.jobs.check_limit,
            sync_threshold_bytes: settings.jobs.sync_threshold_bytes,
        },
    ));

    let router = create_router(AppState { orchestrator });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
