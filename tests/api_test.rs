use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use bytes::Bytes;
use http_body_util::BodyExt;
use tower::ServiceExt;

use voxrelay::application::ports::{
    AudioStore, AudioStoreError, SourceTag, SpeechEngine, SynthesisError, TranscriptionEngine,
    TranscriptionError, TranscriptionHandle, TranscriptionPoll, TranslationEngine,
    TranslationError, VoiceQuality,
};
use voxrelay::application::services::{
    JobOrchestrator, OrchestratorConfig, SpeechService, TranslationPipeline,
};
use voxrelay::domain::{LanguageCode, StorageKey};
use voxrelay::infrastructure::persistence::MemoryJobStore;
use voxrelay::presentation::{create_router, AppState};

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

struct MockAudioStore;

#[async_trait::async_trait]
impl AudioStore for MockAudioStore {
    async fn put(&self, _key: &StorageKey, _data: Bytes) -> Result<(), AudioStoreError> {
        Ok(())
    }

    async fn presigned_url(
        &self,
        key: &StorageKey,
        _expires_in: Duration,
    ) -> Result<String, AudioStoreError> {
        Ok(format!("http://signed.test/{}", key))
    }
}

struct ScriptedTranscriptionEngine {
    script: Mutex<VecDeque<TranscriptionPoll>>,
}

impl ScriptedTranscriptionEngine {
    fn new(script: Vec<TranscriptionPoll>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for ScriptedTranscriptionEngine {
    async fn submit(
        &self,
        job_name: &str,
        _audio_key: &StorageKey,
        _locale: &str,
    ) -> Result<TranscriptionHandle, TranscriptionError> {
        Ok(TranscriptionHandle(job_name.to_string()))
    }

    async fn status(
        &self,
        _handle: &TranscriptionHandle,
    ) -> Result<TranscriptionPoll, TranscriptionError> {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            Ok(script.pop_front().unwrap())
        } else {
            Ok(script
                .front()
                .cloned()
                .unwrap_or(TranscriptionPoll::InProgress))
        }
    }
}

struct EchoTranslationEngine;

#[async_trait::async_trait]
impl TranslationEngine for EchoTranslationEngine {
    async fn translate(
        &self,
        text: &str,
        _source: SourceTag,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        Ok(format!("{} [{}]", text, target))
    }
}

struct MockSpeechEngine;

#[async_trait::async_trait]
impl SpeechEngine for MockSpeechEngine {
    async fn synthesize(
        &self,
        _text: &str,
        _voice_id: &str,
        _quality: VoiceQuality,
    ) -> Result<Bytes, SynthesisError> {
        Ok(Bytes::from_static(b"mp3-bytes"))
    }
}

fn test_router(script: Vec<TranscriptionPoll>) -> axum::Router {
    let audio_store: Arc<dyn AudioStore> = Arc::new(MockAudioStore);
    let orchestrator = Arc::new(JobOrchestrator::new(
        Arc::new(MemoryJobStore::new()),
        Arc::clone(&audio_store),
        Arc::new(ScriptedTranscriptionEngine::new(script)),
        TranslationPipeline::new(Arc::new(EchoTranslationEngine)),
        SpeechService::new(
            Arc::new(MockSpeechEngine),
            audio_store,
            Duration::from_secs(3600),
        ),
        OrchestratorConfig::default(),
    ));
    create_router(AppState { orchestrator })
}

fn multipart_body(audio: &[u8], source: &str, target: &str) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in [("sourceLanguage", source), ("targetLanguage", target)] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"audio\"; \
             filename=\"clip.webm\"\r\nContent-Type: audio/webm\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(audio);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn submit_request(audio: &[u8], source: &str, target: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/translations")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(audio, source, target)))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let router = test_router(vec![]);
    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn short_clip_returns_immediate_result() {
    let router = test_router(vec![]);
    let response = router
        .oneshot(submit_request(b"tiny-clip", "en", "es"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["originalText"], "Short message in en");
    assert!(!body["translatedText"].as_str().unwrap().is_empty());
    assert!(body["audioUrl"].as_str().unwrap().contains("output/"));
    assert!(body.get("jobId").is_none());
}

#[tokio::test]
async fn long_clip_is_accepted_then_polls_to_completion() {
    let router = test_router(vec![
        TranscriptionPoll::InProgress,
        TranscriptionPoll::Completed(Ok("konnichiwa sekai".to_string())),
    ]);

    let audio = vec![0u8; 60_000];
    let response = router
        .clone()
        .oneshot(submit_request(&audio, "ja", "en"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = json_body(response).await;
    assert_eq!(body["status"], "PROCESSING");
    let job_id = body["jobId"].as_str().unwrap().to_string();

    let poll_uri = format!("/api/v1/translations/{}", job_id);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(&poll_uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "PROCESSING");

    let response = router
        .oneshot(
            Request::builder()
                .uri(&poll_uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "COMPLETED");
    assert_eq!(body["originalText"], "konnichiwa sekai");
    assert!(!body["translatedText"].as_str().unwrap().is_empty());
    assert!(!body["audioUrl"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_job_returns_not_found() {
    let router = test_router(vec![]);
    let response = router
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/api/v1/translations/{}",
                    uuid::Uuid::new_v4()
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("Job not found"));
}

#[tokio::test]
async fn malformed_job_id_is_a_client_error() {
    let router = test_router(vec![]);
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/translations/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_audio_is_rejected() {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"sourceLanguage\"\r\n\r\nen\r\n--{BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/translations")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let router = test_router(vec![]);
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "No audio data found");
}
