//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Duplicate capability name: {0}")]
    DuplicateCapability(String),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("A turn is already in progress")]
    TurnInProgress,
}

impl DomainError {
    /// Whether this error means the submission should simply be ignored
    pub fn is_ignorable(&self) -> bool {
        matches!(self, DomainError::EmptyMessage | DomainError::TurnInProgress)
    }
}
