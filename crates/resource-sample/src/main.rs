//! # Resource Sample
//!
//! Starts the [`ResourceSystem`], creates project 14 and a task in it, then lists the
//! projects and logs the meta and links attached on both scopes.
//!
//! ```bash
//! RUST_LOG=info cargo run -p resource-sample
//! ```

use resource_framework::tracing::setup_tracing;
use resource_framework::ResourceInformation;
use resource_sample::lifecycle::{ResourceSystem, SystemConfig};
use resource_sample::model::{Project, Task};
use resource_sample::project_repository::{ProjectsLinksInformation, ProjectsMetaInformation};
use tracing::{error, info, Instrument};

const CONFIG_VAR: &str = "RESOURCE_SAMPLE_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env_var(CONFIG_VAR)?;
    let system = ResourceSystem::with_config(&config)?;

    let span = tracing::info_span!("setup");
    async {
        let project = system
            .project_client
            .create_project(Project::new(14, "Apollo"))
            .await?;
        info!(project_id = %project.id, "Project created");

        let task = system
            .task_client
            .create_task(Task::new(1, "Write docs").in_project(project.id))
            .await?;
        info!(task_id = %task.id, "Task created");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("listing");
    let listing = async {
        let list = system.project_client.list_projects().await?;
        let meta: ProjectsMetaInformation = list.get_meta()?;
        let links: ProjectsLinksInformation = list.get_links()?;
        info!(meta = %meta.meta_value, links = %links.link_value, count = list.len(), "Projects listed");

        for project in &list {
            info!(
                project_id = %project.id,
                meta = %project.require_meta()?.value,
                links = %project.require_links()?.value,
                "Project information"
            );
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = listing {
        error!(error = %e, "Listing failed");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
