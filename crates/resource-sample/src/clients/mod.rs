//! Domain-specific clients wrapping the generic [`RepositoryClient`](resource_framework::RepositoryClient).

pub mod project_client;
pub mod task_client;

pub use project_client::ProjectClient;
pub use task_client::TaskClient;
