//! # Project Repository
//!
//! This module implements the Project resource, the one resource in the sample that
//! carries meta and links on both scopes.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`](resource_framework::ResourceEntity) implementation for [`Project`]
//! - [`error`] - [`ProjectError`] type for type-safe error handling
//! - [`information`] - the collection-scoped [`ProjectsMetaInformation`] and
//!   [`ProjectsLinksInformation`]
//! - [`new()`] - Factory function that creates the repository and client
//!
//! ## What a read attaches
//!
//! | Scope | Channel | Type | Value |
//! |-------|---------|------|-------|
//! | collection | meta | [`ProjectsMetaInformation`] | `meta_value = "testMeta"` |
//! | collection | links | [`ProjectsLinksInformation`] | `link_value = "testLink"` |
//! | resource | meta | [`ProjectMeta`](crate::model::ProjectMeta) | `value = "someMetaValue"` |
//! | resource | links | [`ProjectLinks`](crate::model::ProjectLinks) | `value = "someLinkValue"` |
//!
//! ## Usage
//!
//! ```rust
//! use resource_framework::{QuerySpec, ResourceInformation};
//! use resource_sample::clients::ProjectClient;
//! use resource_sample::model::Project;
//! use resource_sample::project_repository::{self, ProjectsMetaInformation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (repository, generic_client) = project_repository::new();
//!     let client = ProjectClient::new(generic_client);
//!     tokio::spawn(repository.run(()));
//!
//!     client.create_project(Project::new(14, "Apollo")).await?;
//!
//!     let list = client.list_projects().await?;
//!     let meta: ProjectsMetaInformation = list.get_meta()?;
//!     assert_eq!(meta.meta_value, "testMeta");
//!     assert_eq!(list[0].require_meta()?.value, "someMetaValue");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod information;

pub use error::*;
pub use information::*;

use crate::model::Project;
use resource_framework::{ConfigError, RepositoryClient, RepositoryConfig, ResourceRepository};

/// Creates a new Project repository and its client.
pub fn new() -> (ResourceRepository<Project>, RepositoryClient<Project>) {
    ResourceRepository::new(RepositoryConfig::default().buffer_size)
}

/// Creates a Project repository sized from `config`.
pub fn with_config(
    config: &RepositoryConfig,
) -> Result<(ResourceRepository<Project>, RepositoryClient<Project>), ConfigError> {
    ResourceRepository::with_config(config)
}
