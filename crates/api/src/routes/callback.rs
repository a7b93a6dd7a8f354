//! Route definitions for the provisioning backend callback.

use axum::routing::post;
use axum::Router;

use crate::handlers::callback;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// POST   /callback       -> ingest_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/callback", post(callback::ingest_progress))
}
