use std::sync::Arc;

use aura_core::JobRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory deployment job registry.
    pub registry: Arc<JobRegistry>,
    /// Server configuration (callback api key, timeouts).
    pub config: Arc<ServerConfig>,
}
