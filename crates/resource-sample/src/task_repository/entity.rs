//! ResourceEntity trait implementation for the Task domain type.

use super::TaskError;
use crate::clients::ProjectClient;
use crate::model::{Task, TaskId};
use crate::project_repository::ProjectError;
use async_trait::async_trait;
use resource_framework::ResourceEntity;
use tracing::debug;

#[async_trait]
impl ResourceEntity for Task {
    const RESOURCE_TYPE: &'static str = "tasks";
    type Id = TaskId;
    type Meta = ();
    type Links = ();
    type Context = ProjectClient;
    type Error = TaskError;

    fn id(&self) -> TaskId {
        self.id
    }

    async fn on_create(&mut self, projects: &ProjectClient) -> Result<(), TaskError> {
        check_project(self, projects).await
    }

    async fn on_save(&mut self, projects: &ProjectClient) -> Result<(), TaskError> {
        check_project(self, projects).await
    }
}

/// A task may only point at a project that exists.
async fn check_project(task: &Task, projects: &ProjectClient) -> Result<(), TaskError> {
    let Some(project_id) = task.project_id else {
        return Ok(());
    };
    debug!(task_id = %task.id, %project_id, "Validating project");
    match projects.project_exists(project_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(TaskError::InvalidProject(project_id.to_string())),
        Err(ProjectError::RepositoryError(e)) => Err(TaskError::RepositoryError(e)),
        Err(e) => Err(TaskError::InvalidProject(e.to_string())),
    }
}
