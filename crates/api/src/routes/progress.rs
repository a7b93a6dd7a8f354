//! Route definitions for the progress polling endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// GET    /progress/{id}  -> get_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/progress/{id}", get(progress::get_progress))
}
