//! Deployment job model and deploy-spec validation.
//!
//! A [`Job`] tracks a single game-server deployment from request to
//! terminal outcome. The [`DeploySpec`] mirrors the JSON body submitted
//! by the deployment wizard (camelCase on the wire).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Diagnostic message applied when a job is failed by the timeout sweep.
pub const TIMEOUT_MESSAGE: &str = "deployment timed out";

/// Message assigned to a freshly created job before any progress arrives.
pub const QUEUED_MESSAGE: &str = "Deployment queued";

/// Valid gamemode values accepted in a deploy spec.
pub const VALID_GAMEMODES: &[&str] = &["survival", "creative", "adventure", "spectator"];

/// Valid difficulty values accepted in a deploy spec.
pub const VALID_DIFFICULTIES: &[&str] = &["peaceful", "easy", "normal", "hard"];

/// Minimum server memory allocation in GB.
pub const MIN_RAM_GB: u32 = 1;

/// Maximum server memory allocation in GB.
pub const MAX_RAM_GB: u32 = 32;

/// Maximum allowed player slot count.
pub const MAX_PLAYERS_LIMIT: u32 = 1000;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a deployment job.
///
/// Transitions: `Pending -> Running -> {Succeeded, Failed}`, with
/// `Pending -> Failed` reachable directly (timeout before any progress).
/// Terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    /// Whether this status permits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }

    /// Lowercase wire representation, matching the serde serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
        }
    }
}

// ---------------------------------------------------------------------------
// Deploy spec
// ---------------------------------------------------------------------------

/// Loading-screen configuration forwarded by the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingScreen {
    #[serde(default)]
    pub enabled: bool,
    /// Display style, e.g. `"percentage"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub percentage: Option<u8>,
}

/// Parameters for a game-server deployment, as submitted by the wizard.
///
/// `edition` and `version` are required; everything else carries the
/// wizard's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploySpec {
    #[serde(default)]
    pub edition: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub motd: Option<String>,
    /// Memory allocation in GB.
    #[serde(default = "default_ram")]
    pub ram: u32,
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default = "default_gamemode")]
    pub gamemode: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_max_players")]
    pub max_players: u32,
    #[serde(default)]
    pub online_mode: bool,
    #[serde(default)]
    pub loading_screen: Option<LoadingScreen>,
}

fn default_ram() -> u32 {
    2
}

fn default_gamemode() -> String {
    "survival".to_string()
}

fn default_difficulty() -> String {
    "normal".to_string()
}

fn default_max_players() -> u32 {
    20
}

impl DeploySpec {
    /// Validate the spec.
    ///
    /// Rules:
    /// - `edition` and `version` must be non-empty.
    /// - `ram` must be within `MIN_RAM_GB..=MAX_RAM_GB`.
    /// - `max_players` must be within `1..=MAX_PLAYERS_LIMIT`.
    /// - `gamemode` and `difficulty` must be one of the known values.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.edition.trim().is_empty() {
            return Err(CoreError::Validation(
                "edition is required and must not be empty".to_string(),
            ));
        }
        if self.version.trim().is_empty() {
            return Err(CoreError::Validation(
                "version is required and must not be empty".to_string(),
            ));
        }
        if !(MIN_RAM_GB..=MAX_RAM_GB).contains(&self.ram) {
            return Err(CoreError::Validation(format!(
                "ram must be between {MIN_RAM_GB} and {MAX_RAM_GB} GB, got {}",
                self.ram
            )));
        }
        if self.max_players == 0 || self.max_players > MAX_PLAYERS_LIMIT {
            return Err(CoreError::Validation(format!(
                "maxPlayers must be between 1 and {MAX_PLAYERS_LIMIT}, got {}",
                self.max_players
            )));
        }
        if !VALID_GAMEMODES.contains(&self.gamemode.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown gamemode: '{}'. Valid gamemodes: {}",
                self.gamemode,
                VALID_GAMEMODES.join(", ")
            )));
        }
        if !VALID_DIFFICULTIES.contains(&self.difficulty.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown difficulty: '{}'. Valid difficulties: {}",
                self.difficulty,
                VALID_DIFFICULTIES.join(", ")
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// A single deployment job tracked from request to terminal outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque unique identifier, immutable after creation.
    pub id: Uuid,
    pub status: JobStatus,
    /// Percent complete, `0..=100`, non-decreasing while running.
    pub percent: u8,
    /// Latest human-readable status line.
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// The validated spec the job was created from.
    pub spec: DeploySpec,
}

impl Job {
    /// Create a new pending job with a fresh id.
    pub fn new(spec: DeploySpec) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            status: JobStatus::Pending,
            percent: 0,
            message: QUEUED_MESSAGE.to_string(),
            created_at: now,
            updated_at: now,
            spec,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_spec() -> DeploySpec {
        serde_json::from_value(serde_json::json!({
            "edition": "vanilla",
            "version": "1.21.1",
        }))
        .unwrap()
    }

    // -- defaults --------------------------------------------------------------

    #[test]
    fn spec_defaults_match_wizard() {
        let spec = minimal_spec();
        assert_eq!(spec.ram, 2);
        assert_eq!(spec.gamemode, "survival");
        assert_eq!(spec.difficulty, "normal");
        assert_eq!(spec.max_players, 20);
        assert!(!spec.online_mode);
    }

    #[test]
    fn spec_accepts_full_wizard_payload() {
        let spec: DeploySpec = serde_json::from_value(serde_json::json!({
            "edition": "paper",
            "version": "1.21.1",
            "motd": "✨ Paper 1.21.1 Server ✨",
            "ram": 4,
            "serverName": "paper-1-21-1-test",
            "gamemode": "creative",
            "difficulty": "hard",
            "maxPlayers": 50,
            "onlineMode": true,
            "loadingScreen": { "enabled": true, "type": "percentage", "percentage": 10 },
        }))
        .unwrap();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.server_name.as_deref(), Some("paper-1-21-1-test"));
        let ls = spec.loading_screen.unwrap();
        assert!(ls.enabled);
        assert_eq!(ls.kind.as_deref(), Some("percentage"));
        assert_eq!(ls.percentage, Some(10));
    }

    // -- validation ------------------------------------------------------------

    #[test]
    fn valid_spec_accepted() {
        assert!(minimal_spec().validate().is_ok());
    }

    #[test]
    fn missing_edition_rejected() {
        let mut spec = minimal_spec();
        spec.edition = String::new();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn missing_version_rejected() {
        let mut spec = minimal_spec();
        spec.version = "   ".to_string();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn ram_out_of_range_rejected() {
        let mut spec = minimal_spec();
        spec.ram = 0;
        assert!(spec.validate().is_err());
        spec.ram = MAX_RAM_GB + 1;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn zero_max_players_rejected() {
        let mut spec = minimal_spec();
        spec.max_players = 0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn unknown_gamemode_rejected() {
        let mut spec = minimal_spec();
        spec.gamemode = "hardcore".to_string();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn unknown_difficulty_rejected() {
        let mut spec = minimal_spec();
        spec.difficulty = "impossible".to_string();
        assert!(spec.validate().is_err());
    }

    // -- status ----------------------------------------------------------------

    #[test]
    fn terminal_statuses() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(JobStatus::Succeeded).unwrap(),
            serde_json::json!("succeeded")
        );
        assert_eq!(JobStatus::Running.as_str(), "running");
    }

    #[test]
    fn new_job_starts_pending_at_zero() {
        let job = Job::new(minimal_spec());
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.percent, 0);
        assert_eq!(job.message, QUEUED_MESSAGE);
        assert_eq!(job.created_at, job.updated_at);
    }
}
