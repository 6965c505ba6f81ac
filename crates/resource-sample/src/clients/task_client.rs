//! # Task Client
//!
//! Provides a high-level API for the Task repository.
use crate::model::Task;
use crate::task_repository::TaskError;
use async_trait::async_trait;
use resource_framework::{QuerySpec, RepositoryAccess, RepositoryClient, RepositoryError, ResourceList};
use tracing::{debug, instrument};

/// Client for interacting with the Task repository.
#[derive(Clone)]
pub struct TaskClient {
    inner: RepositoryClient<Task>,
}

impl TaskClient {
    #[instrument(skip(self, task), fields(task_id = %task.id))]
    pub async fn create_task(&self, task: Task) -> Result<Task, TaskError> {
        debug!("Sending request");
        self.inner.create(task).await.map_err(task_error)
    }

    #[instrument(skip(self, task), fields(task_id = %task.id))]
    pub async fn save_task(&self, task: Task) -> Result<Task, TaskError> {
        debug!("Sending request");
        self.inner.save(task).await.map_err(task_error)
    }

    pub async fn list_tasks(&self) -> Result<ResourceList<Task>, TaskError> {
        self.find_all(QuerySpec::for_resource::<Task>()).await
    }
}

/// Hook failures arrive boxed; the project check is surfaced as-is.
fn task_error(e: RepositoryError) -> TaskError {
    match e {
        RepositoryError::EntityError(inner) => match inner.downcast::<TaskError>() {
            Ok(task_error) => *task_error,
            Err(other) => TaskError::RepositoryError(other.to_string()),
        },
        other => other.into(),
    }
}
