//! In-memory deployment job registry.
//!
//! [`JobRegistry`] exclusively owns all [`Job`] records. Mutation goes
//! through its controlled update operations only, so concurrent progress
//! events for the same job cannot race, and readers always observe a
//! fully-formed snapshot (the write lock is held for the whole mutation;
//! reads clone the record).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CoreError;
use crate::job::{DeploySpec, Job, JobStatus, TIMEOUT_MESSAGE};

/// Thread-safe registry of deployment jobs.
///
/// Shared across handlers and background sweeps via `Arc<JobRegistry>`.
#[derive(Debug, Default)]
pub struct JobRegistry {
    jobs: RwLock<HashMap<Uuid, Job>>,
}

impl JobRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a deploy spec and store a new pending job for it.
    ///
    /// Returns `CoreError::Validation` without storing anything if the
    /// spec is invalid.
    pub async fn create(&self, spec: DeploySpec) -> Result<Job, CoreError> {
        spec.validate()?;

        let job = Job::new(spec);
        let mut jobs = self.jobs.write().await;
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    /// Snapshot lookup of a single job.
    pub async fn get(&self, id: Uuid) -> Result<Job, CoreError> {
        let jobs = self.jobs.read().await;
        jobs.get(&id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "Job", id })
    }

    /// Snapshot of all jobs, newest first.
    pub async fn list(&self) -> Vec<Job> {
        let jobs = self.jobs.read().await;
        let mut all: Vec<Job> = jobs.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// Number of tracked jobs.
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Whether the registry holds no jobs.
    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }

    /// Apply a monotonic progress update.
    ///
    /// - A percent lower than the stored value is a stale or out-of-order
    ///   event: the update is a no-op and the current snapshot is returned.
    /// - Percent values above 100 are clamped to 100.
    /// - The first accepted update moves a pending job to running.
    /// - Reaching 100 finalizes the job as succeeded.
    /// - Updates against a terminal job are no-ops returning the terminal
    ///   snapshot (terminal states are final).
    pub async fn update_progress(
        &self,
        id: Uuid,
        percent: u8,
        message: &str,
    ) -> Result<Job, CoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: "Job", id })?;

        if job.status.is_terminal() {
            return Ok(job.clone());
        }

        let percent = percent.min(100);
        if percent < job.percent {
            tracing::debug!(
                job_id = %id,
                stored = job.percent,
                received = percent,
                "Ignoring out-of-order progress update",
            );
            return Ok(job.clone());
        }

        job.percent = percent;
        job.message = message.to_string();
        job.status = if percent == 100 {
            JobStatus::Succeeded
        } else {
            JobStatus::Running
        };
        job.updated_at = Utc::now();
        Ok(job.clone())
    }

    /// Transition a job to a terminal status.
    ///
    /// Idempotent: if the job is already terminal the original terminal
    /// state is preserved and returned. A succeeded outcome also pins the
    /// percent to 100 so polling clients observe completion.
    pub async fn mark_terminal(
        &self,
        id: Uuid,
        status: JobStatus,
        message: &str,
    ) -> Result<Job, CoreError> {
        if !status.is_terminal() {
            return Err(CoreError::Validation(format!(
                "Cannot mark a job terminal with non-terminal status '{}'",
                status.as_str()
            )));
        }

        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: "Job", id })?;

        if job.status.is_terminal() {
            return Ok(job.clone());
        }

        job.status = status;
        job.message = message.to_string();
        if status == JobStatus::Succeeded {
            job.percent = 100;
        }
        job.updated_at = Utc::now();
        Ok(job.clone())
    }

    /// Fail every non-terminal job whose last update predates `cutoff`.
    ///
    /// Applies the fixed `"deployment timed out"` diagnostic and returns
    /// the jobs that were transitioned. Jobs already terminal are never
    /// touched, so each job can time out at most once.
    pub async fn expire_stale(&self, cutoff: DateTime<Utc>) -> Vec<Job> {
        let mut jobs = self.jobs.write().await;
        let mut expired = Vec::new();

        for job in jobs.values_mut() {
            if !job.status.is_terminal() && job.updated_at < cutoff {
                job.status = JobStatus::Failed;
                job.message = TIMEOUT_MESSAGE.to_string();
                job.updated_at = Utc::now();
                expired.push(job.clone());
            }
        }

        expired
    }

    /// Remove terminal jobs whose last update predates `cutoff`.
    ///
    /// Returns the number of jobs removed. Non-terminal jobs are always
    /// retained regardless of age.
    pub async fn purge_terminal_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|_, job| !job.status.is_terminal() || job.updated_at >= cutoff);
        before - jobs.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
