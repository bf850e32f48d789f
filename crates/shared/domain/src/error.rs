//! Domain-level errors.
//!
//! These errors represent the two ways a user operation can be refused.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record matches the requested identifier
    #[error("{0} not found")]
    NotFound(String),

    /// Input could not be bound to the expected shape
    #[error("{0}")]
    BadInput(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Create a bad input error
    pub fn bad_input(msg: impl Into<String>) -> Self {
        DomainError::BadInput(msg.into())
    }
}
