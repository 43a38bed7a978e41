use std::sync::{Arc, Mutex};

use voxrelay::application::ports::{SourceTag, TranslationEngine, TranslationError};
use voxrelay::application::services::TranslationPipeline;
use voxrelay::domain::LanguageCode;

/// Records every hop the pipeline requests and answers from a script of
/// results, repeating the last entry.
struct RecordingEngine {
    calls: Mutex<Vec<(SourceTag, String)>>,
    results: Mutex<Vec<Result<String, String>>>,
}

impl RecordingEngine {
    fn new(results: Vec<Result<String, String>>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            results: Mutex::new(results),
        })
    }

    fn calls(&self) -> Vec<(SourceTag, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranslationEngine for RecordingEngine {
    async fn translate(
        &self,
        _text: &str,
        source: SourceTag,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.calls
            .lock()
            .unwrap()
            .push((source, target.as_str().to_string()));

        let mut results = self.results.lock().unwrap();
        let next = if results.len() > 1 {
            results.remove(0)
        } else {
            results.first().cloned().unwrap_or(Ok("out".to_string()))
        };
        next.map_err(TranslationError::ApiRequestFailed)
    }
}

fn lang(code: &str) -> LanguageCode {
    LanguageCode::normalize(code)
}

#[tokio::test]
async fn non_english_source_pivots_through_english() {
    let engine = RecordingEngine::new(vec![
        Ok("hello world".to_string()),
        Ok("hola mundo".to_string()),
    ]);
    let pipeline = TranslationPipeline::new(Arc::clone(&engine) as _);

    let out = pipeline
        .translate("namaste duniya", &lang("hi"), &lang("es"))
        .await;

    assert_eq!(out, "hola mundo");
    assert_eq!(
        engine.calls(),
        vec![
            (SourceTag::Auto, "en".to_string()),
            (SourceTag::Tagged(lang("en")), "es".to_string()),
        ]
    );
}

#[tokio::test]
async fn english_target_stops_at_the_pivot() {
    let engine = RecordingEngine::new(vec![Ok("hello world".to_string())]);
    let pipeline = TranslationPipeline::new(Arc::clone(&engine) as _);

    let out = pipeline
        .translate("namaste duniya", &lang("hi"), &lang("en"))
        .await;

    assert_eq!(out, "hello world");
    assert_eq!(engine.calls(), vec![(SourceTag::Auto, "en".to_string())]);
}

#[tokio::test]
async fn english_source_translates_directly() {
    let engine = RecordingEngine::new(vec![Ok("hola".to_string())]);
    let pipeline = TranslationPipeline::new(Arc::clone(&engine) as _);

    let out = pipeline.translate("hello", &lang("en"), &lang("es")).await;

    assert_eq!(out, "hola");
    assert_eq!(
        engine.calls(),
        vec![(SourceTag::Tagged(lang("en")), "es".to_string())]
    );
}

#[tokio::test]
async fn same_language_pair_translates_directly() {
    let engine = RecordingEngine::new(vec![Ok("hallo".to_string())]);
    let pipeline = TranslationPipeline::new(Arc::clone(&engine) as _);

    let out = pipeline.translate("hallo", &lang("de"), &lang("de")).await;

    assert_eq!(out, "hallo");
    assert_eq!(
        engine.calls(),
        vec![(SourceTag::Tagged(lang("de")), "de".to_string())]
    );
}

#[tokio::test]
async fn primary_failure_retries_with_auto_detection() {
    let engine = RecordingEngine::new(vec![
        Err("pivot hop rejected".to_string()),
        Ok("hola mundo".to_string()),
    ]);
    let pipeline = TranslationPipeline::new(Arc::clone(&engine) as _);

    let out = pipeline
        .translate("namaste duniya", &lang("hi"), &lang("es"))
        .await;

    assert_eq!(out, "hola mundo");
    assert_eq!(
        engine.calls(),
        vec![
            (SourceTag::Auto, "en".to_string()),
            (SourceTag::Auto, "es".to_string()),
        ]
    );
}

#[tokio::test]
async fn double_failure_degrades_to_sentinel_text() {
    let engine = RecordingEngine::new(vec![Err("engine offline".to_string())]);
    let pipeline = TranslationPipeline::new(Arc::clone(&engine) as _);

    let out = pipeline.translate("hello", &lang("en"), &lang("es")).await;

    assert!(out.starts_with("Translation error:"));
    assert!(out.contains("engine offline"));
}
