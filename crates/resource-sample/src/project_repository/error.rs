//! Error types for the Project repository.

use resource_framework::{InformationError, RepositoryError};
use thiserror::Error;

/// Errors that can occur during project operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectError {
    /// The requested project was not found.
    #[error("Project not found: {0}")]
    NotFound(String),

    /// A project with the same id already exists.
    #[error("Project already exists: {0}")]
    AlreadyExists(String),

    /// Project meta or links could not be attached or read.
    #[error("Project information error: {0}")]
    InformationError(String),

    /// An error occurred while communicating with the repository.
    #[error("Repository communication error: {0}")]
    RepositoryError(String),
}

impl From<String> for ProjectError {
    fn from(msg: String) -> Self {
        ProjectError::RepositoryError(msg)
    }
}

impl From<InformationError> for ProjectError {
    fn from(e: InformationError) -> Self {
        ProjectError::InformationError(e.to_string())
    }
}

impl From<RepositoryError> for ProjectError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(id) => ProjectError::NotFound(id),
            RepositoryError::AlreadyExists(id) => ProjectError::AlreadyExists(id),
            other => ProjectError::RepositoryError(other.to_string()),
        }
    }
}
