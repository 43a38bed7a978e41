use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::{OrchestratorError, PollOutcome};
use crate::domain::JobId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedResponse {
    pub job_id: String,
    pub status: String,
    pub original_text: String,
    pub translated_text: String,
    pub audio_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    match state.orchestrator.poll(JobId::from_uuid(uuid)).await {
        Ok(PollOutcome::Processing { job_id, message }) => (
            StatusCode::OK,
            Json(PendingResponse {
                job_id: job_id.to_string(),
                status: "PROCESSING".to_string(),
                message,
            }),
        )
            .into_response(),
        Ok(PollOutcome::Completed { job_id, result }) => (
            StatusCode::OK,
            Json(CompletedResponse {
                job_id: job_id.to_string(),
                status: "COMPLETED".to_string(),
                original_text: result.original_text,
                translated_text: result.translated_text,
                audio_url: result.audio_url,
            }),
        )
            .into_response(),
        Err(OrchestratorError::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job not found: {}", id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Status poll failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
