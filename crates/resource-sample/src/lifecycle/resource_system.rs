use crate::clients::{ProjectClient, TaskClient};
use crate::lifecycle::SystemConfig;
use crate::model::{Project, Task};
use resource_framework::{ConfigError, RepositoryClient, ResourceRepository};
use tracing::{error, info};

/// The runtime orchestrator for the sample repositories.
///
/// `ResourceSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every repository
/// - **Dependency Wiring**: the Task repository validates projects through a `ProjectClient`
///
/// # Example
///
/// ```rust
/// use resource_sample::lifecycle::ResourceSystem;
/// use resource_sample::model::Project;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ResourceSystem::new();
///     system.project_client.create_project(Project::new(14, "Apollo")).await?;
///     assert_eq!(system.project_client.list_projects().await?.len(), 1);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ResourceSystem {
    /// Client for the Project repository
    pub project_client: ProjectClient,

    /// Client for the Task repository
    pub task_client: TaskClient,

    /// Task handles for all running repositories (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ResourceSystem {
    /// Creates and starts every repository with the default configuration.
    pub fn new() -> Self {
        // 1. Create repositories (no dependencies)
        let (project_repository, project_client) = crate::project_repository::new();
        let (task_repository, task_client) = crate::task_repository::new();
        Self::start(project_repository, project_client, task_repository, task_client)
    }

    /// Creates and starts every repository sized from `config`.
    pub fn with_config(config: &SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (project_repository, project_client) =
            crate::project_repository::with_config(&config.projects)?;
        let (task_repository, task_client) = crate::task_repository::with_config(&config.tasks)?;
        Ok(Self::start(
            project_repository,
            project_client,
            task_repository,
            task_client,
        ))
    }

    fn start(
        project_repository: ResourceRepository<Project>,
        project_client: RepositoryClient<Project>,
        task_repository: ResourceRepository<Task>,
        task_client: RepositoryClient<Task>,
    ) -> Self {
        let project_client = ProjectClient::new(project_client);
        let task_client = TaskClient::new(task_client);

        // 2. Start repositories with injected context
        let project_handle = tokio::spawn(project_repository.run(()));
        let task_handle = tokio::spawn(task_repository.run(project_client.clone()));

        info!("Resource system started");
        Self {
            project_client,
            task_client,
            handles: vec![project_handle, task_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes the request channels, then waits for every
    /// repository task. Returns an error if any task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.task_client);
        drop(self.project_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Repository task failed: {:?}", e);
                return Err(format!("Repository task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for ResourceSystem {
    fn default() -> Self {
        Self::new()
    }
}
