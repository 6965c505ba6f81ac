//! Error types for the Task repository.

use resource_framework::RepositoryError;
use thiserror::Error;

/// Errors that can occur during task operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskError {
    /// The requested task was not found.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// A task with the same id already exists.
    #[error("Task already exists: {0}")]
    AlreadyExists(String),

    /// The project the task refers to does not exist.
    #[error("Invalid project: {0}")]
    InvalidProject(String),

    /// An error occurred while communicating with the repository.
    #[error("Repository communication error: {0}")]
    RepositoryError(String),
}

impl From<String> for TaskError {
    fn from(msg: String) -> Self {
        TaskError::RepositoryError(msg)
    }
}

impl From<RepositoryError> for TaskError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(id) => TaskError::NotFound(id),
            RepositoryError::AlreadyExists(id) => TaskError::AlreadyExists(id),
            other => TaskError::RepositoryError(other.to_string()),
        }
    }
}
