//! Domain-level error types.

use specimen_shared::PageError;
use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid pagination: {0}")]
    Pagination(#[from] PageError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Invalid pagination: {0}")]
    Pagination(#[from] PageError),
}
