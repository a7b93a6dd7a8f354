pub mod callback;
pub mod deploy;
pub mod health;
pub mod progress;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /deploy                  submit a deployment (POST)
/// /deployments             list all tracked jobs (GET)
/// /progress/{id}           poll job progress (GET)
/// /callback                provisioning backend progress push (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(deploy::router())
        .merge(progress::router())
        .merge(callback::router())
}
