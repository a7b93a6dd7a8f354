//! Handler for the progress polling endpoint.
//!
//! The response is exactly `{percent, message, status}` -- the field set
//! and names the existing polling client depends on. A non-blocking
//! snapshot read: it never waits for new progress.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use aura_core::JobStatus;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::state::AppState;

/// Progress snapshot returned to polling clients.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub percent: u8,
    pub message: String,
    pub status: JobStatus,
}

/// GET /api/v1/progress/{id}
///
/// Returns the current snapshot for the job, or 404 if the id is unknown
/// (the client should stop polling and surface an error).
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let job = state.registry.get(id).await?;

    Ok(Json(ProgressResponse {
        percent: job.percent,
        message: job.message,
        status: job.status,
    }))
}
