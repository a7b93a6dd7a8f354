//! Handler for progress events pushed by the provisioning backend.
//!
//! Translates a [`ProgressEvent`] into registry updates: an event carrying
//! `error` fails the job with the message preserved, otherwise the percent
//! and message are applied monotonically. Only the latest value per job is
//! retained; no history queue exists.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use aura_core::{CoreError, JobStatus};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::router::API_KEY_HEADER;
use crate::state::AppState;

/// A progress event pushed by the provisioning backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub job_id: Uuid,
    #[serde(default)]
    pub percent: u8,
    #[serde(default)]
    pub message: Option<String>,
    /// Present when the backend hit a terminal error.
    #[serde(default)]
    pub error: Option<String>,
}

/// POST /api/v1/callback
///
/// Ingest a backend progress event. Events for unknown job ids are logged
/// and dropped -- they never create a job implicitly. Always returns 202
/// to the backend (the event was consumed either way).
///
/// When `DEPLOY_API_KEY` is configured, the request must carry a matching
/// `x-api-key` header.
pub async fn ingest_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<ProgressEvent>,
) -> AppResult<impl IntoResponse> {
    check_api_key(&state, &headers)?;

    let result = match &event.error {
        Some(error) => {
            state
                .registry
                .mark_terminal(event.job_id, JobStatus::Failed, error)
                .await
        }
        None => {
            let message = event.message.as_deref().unwrap_or_default();
            state
                .registry
                .update_progress(event.job_id, event.percent, message)
                .await
        }
    };

    match result {
        Ok(job) => {
            tracing::debug!(
                job_id = %job.id,
                percent = job.percent,
                status = job.status.as_str(),
                "Progress event applied",
            );
        }
        Err(CoreError::NotFound { .. }) => {
            tracing::warn!(
                job_id = %event.job_id,
                "Dropping progress event for unknown job",
            );
        }
        Err(e) => return Err(e.into()),
    }

    Ok(StatusCode::ACCEPTED)
}

/// Verify the callback api key if one is configured.
fn check_api_key(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(expected) = state.config.api_key.as_deref() else {
        return Ok(());
    };

    let provided = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());

    if provided != Some(expected) {
        return Err(AppError::Unauthorized(
            "Missing or invalid x-api-key header".to_string(),
        ));
    }

    Ok(())
}
