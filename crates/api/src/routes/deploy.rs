//! Route definitions for the deploy resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::deploy;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// POST   /deploy        -> submit_deploy
/// GET    /deployments   -> list_deployments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deploy", post(deploy::submit_deploy))
        .route("/deployments", get(deploy::list_deployments))
}
