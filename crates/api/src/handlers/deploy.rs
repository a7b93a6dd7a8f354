//! Handlers for submitting and listing deployments.
//!
//! The deploy response shape (camelCase, `progressUrl`/`logsUrl`/
//! `commandUrl`) is fixed by the existing wizard client.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use aura_core::{DeploySpec, Job, JobStatus};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::state::AppState;

/// Response returned for an accepted deploy request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub success: bool,
    pub server_id: Uuid,
    pub status: JobStatus,
    pub message: String,
    /// Relative URL the client polls for progress.
    pub progress_url: String,
    /// Relative URL for the server's log stream (served by the
    /// provisioning service).
    pub logs_url: String,
    /// Relative URL for the server's command console (served by the
    /// provisioning service).
    pub command_url: String,
}

impl DeployResponse {
    fn for_job(job: &Job) -> Self {
        Self {
            success: true,
            server_id: job.id,
            status: job.status,
            message: job.message.clone(),
            progress_url: format!("/progress/{}", job.id),
            logs_url: format!("/servers/{}/logs", job.id),
            command_url: format!("/servers/{}/command", job.id),
        }
    }
}

/// POST /api/v1/deploy
///
/// Validate the deploy spec and create a new pending job. Returns 201
/// with the polling URLs. An invalid spec returns 400 and creates no job.
pub async fn submit_deploy(
    State(state): State<AppState>,
    Json(spec): Json<DeploySpec>,
) -> AppResult<impl IntoResponse> {
    let job = state.registry.create(spec).await?;

    tracing::info!(
        job_id = %job.id,
        edition = %job.spec.edition,
        version = %job.spec.version,
        "Deployment job created",
    );

    Ok((StatusCode::CREATED, Json(DeployResponse::for_job(&job))))
}

/// GET /api/v1/deployments
///
/// List all tracked jobs, newest first.
pub async fn list_deployments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let jobs = state.registry.list().await;
    Ok(Json(jobs))
}
