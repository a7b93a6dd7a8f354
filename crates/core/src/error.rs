use uuid::Uuid;

/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup failed.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// Input failed validation; the message describes the offending field.
    #[error("Validation error: {0}")]
    Validation(String),
}
