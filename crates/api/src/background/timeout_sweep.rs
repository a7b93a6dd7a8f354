//! Deployment timeout sweep.
//!
//! Fails any non-terminal job that has gone longer than the configured
//! timeout without a progress update. This runs independently of client
//! polling: a client that stops polling does not affect job execution,
//! and a backend that silently dies cannot leave a job running forever.

use std::sync::Arc;
use std::time::Duration;

use aura_core::JobRegistry;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

/// Run the timeout sweep loop.
///
/// Every `interval`, fails jobs idle for longer than `timeout` with the
/// fixed `"deployment timed out"` diagnostic. Runs until `cancel` is
/// triggered.
pub async fn run(
    registry: Arc<JobRegistry>,
    timeout: Duration,
    interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(
        timeout_secs = timeout.as_secs(),
        interval_secs = interval.as_secs(),
        "Timeout sweep started"
    );

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Timeout sweep stopping");
                break;
            }
            _ = ticker.tick() => {
                let cutoff = Utc::now()
                    - chrono::Duration::from_std(timeout)
                        .unwrap_or_else(|_| chrono::Duration::seconds(300));
                let expired = registry.expire_stale(cutoff).await;

                for job in &expired {
                    tracing::warn!(
                        job_id = %job.id,
                        "Deployment timed out with no progress from backend",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use aura_core::{DeploySpec, JobStatus};

    use super::*;

    fn spec() -> DeploySpec {
        serde_json::from_value(serde_json::json!({
            "edition": "vanilla",
            "version": "1.21.1",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn sweep_fails_idle_job_and_stops_on_cancel() {
        let registry = Arc::new(JobRegistry::new());
        let job = registry.create(spec()).await.unwrap();

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(
            Arc::clone(&registry),
            Duration::from_millis(50),
            Duration::from_millis(20),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(200)).await;

        let stored = registry.get(job.id).await.unwrap();
        assert_eq!(stored.status, JobStatus::Failed);
        assert_eq!(stored.message, aura_core::job::TIMEOUT_MESSAGE);

        cancel.cancel();
        handle.await.unwrap();
    }
}
