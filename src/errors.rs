use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during command execution, persistence and import.
///
/// Every fallible operation in the crate returns `Result<_, ServiceError>`.
/// No-op conditions (already-terminal entity, unknown id on a transition)
/// are *not* errors; they surface as [`crate::commands::TransitionOutcome::Skipped`].
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Import format error: {0}")]
    ImportFormatError(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        ServiceError::NotFound(format!("{} with ID {} not found", entity, id))
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(format!("Invalid input: {}", errors))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}
