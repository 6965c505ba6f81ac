//! # Task Repository
//!
//! Tasks depend on projects: a task naming a project can only be created while that
//! project exists. The repository therefore runs with a [`ProjectClient`] as its context.
//!
//! Tasks attach no meta or links on either scope.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`](resource_framework::ResourceEntity) implementation for [`Task`]
//! - [`error`] - [`TaskError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the repository and client
//!
//! [`ProjectClient`]: crate::clients::ProjectClient

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Task;
use resource_framework::{ConfigError, RepositoryClient, RepositoryConfig, ResourceRepository};

/// Creates a new Task repository and its client.
pub fn new() -> (ResourceRepository<Task>, RepositoryClient<Task>) {
    ResourceRepository::new(RepositoryConfig::default().buffer_size)
}

/// Creates a Task repository sized from `config`.
pub fn with_config(
    config: &RepositoryConfig,
) -> Result<(ResourceRepository<Task>, RepositoryClient<Task>), ConfigError> {
    ResourceRepository::with_config(config)
}
