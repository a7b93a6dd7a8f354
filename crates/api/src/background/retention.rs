//! Periodic cleanup of old terminal jobs.
//!
//! Terminal jobs are retained long enough for the client's final poll,
//! then purged so the in-memory registry does not grow without bound.
//! Runs on a fixed interval using `tokio::time::interval`.

use std::sync::Arc;
use std::time::Duration;

use aura_core::JobRegistry;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

/// Default retention window for terminal jobs: 1 hour.
const DEFAULT_RETENTION_SECS: i64 = 3600;

/// How often the cleanup job runs.
const PURGE_INTERVAL: Duration = Duration::from_secs(300); // 5 minutes

/// Run the retention cleanup loop.
///
/// Purges terminal jobs older than `RETENTION_SECS` (defaults to 3600).
/// Runs until `cancel` is triggered.
pub async fn run(registry: Arc<JobRegistry>, cancel: CancellationToken) {
    let retention_secs: i64 = std::env::var("RETENTION_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RETENTION_SECS);

    tracing::info!(
        retention_secs,
        interval_secs = PURGE_INTERVAL.as_secs(),
        "Job retention sweep started"
    );

    let mut ticker = tokio::time::interval(PURGE_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Job retention sweep stopping");
                break;
            }
            _ = ticker.tick() => {
                let cutoff = Utc::now() - chrono::Duration::seconds(retention_secs);
                let purged = registry.purge_terminal_before(cutoff).await;

                if purged > 0 {
                    tracing::info!(purged, "Job retention: purged old terminal jobs");
                } else {
                    tracing::debug!("Job retention: nothing to purge");
                }
            }
        }
    }
}
