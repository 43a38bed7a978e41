use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::application::services::SubmissionOutcome;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmediateResponse {
    pub original_text: String,
    pub translated_text: String,
    pub audio_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn submit_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut audio: Option<Bytes> = None;
    let mut source_language = "en".to_string();
    let mut target_language = "es".to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => match field.bytes().await {
                Ok(data) => audio = Some(data),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read audio bytes");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read audio: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            "sourceLanguage" => {
                if let Ok(text) = field.text().await {
                    source_language = text;
                }
            }
            "targetLanguage" => {
                if let Ok(text) = field.text().await {
                    target_language = text;
                }
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    let audio = match audio {
        Some(data) if !data.is_empty() => data,
        _ => {
            tracing::warn!("Submission with no audio data");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio data found".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        bytes = audio.len(),
        source = %source_language,
        target = %target_language,
        "Audio upload received"
    );

    match state
        .orchestrator
        .submit(audio, &source_language, &target_language)
        .await
    {
        Ok(SubmissionOutcome::Immediate(result)) => (
            StatusCode::OK,
            Json(ImmediateResponse {
                original_text: result.original_text,
                translated_text: result.translated_text,
                audio_url: result.audio_url,
            }),
        )
            .into_response(),
        Ok(SubmissionOutcome::Accepted { job_id }) => (
            StatusCode::ACCEPTED,
            Json(AcceptedResponse {
                job_id: job_id.to_string(),
                status: "PROCESSING".to_string(),
                message: "Your audio is being processed. Check status with the jobId.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Submission failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Error processing request: {}", e),
                }),
            )
                .into_response()
        }
    }
}
