//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No active council lenses defined")]
    NoActiveLenses,

    #[error("Malformed {stage} reply: {detail}")]
    MalformedReply { stage: String, detail: String },

    #[error("Invalid objective: {0}")]
    InvalidObjective(String),

    #[error("Invalid task type: {0}")]
    InvalidTaskType(String),

    #[error("Run cancelled")]
    Cancelled,
}

impl DomainError {
    /// Build a malformed-reply error for a named pipeline stage
    pub fn malformed(stage: impl Into<String>, detail: impl Into<String>) -> Self {
        DomainError::MalformedReply {
            stage: stage.into(),
            detail: detail.into(),
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
