use resource_framework::{
    Information, LinksInformation, MetaInformation, QuerySpec, RepositoryAccess, ResourceEntity,
    ResourceInformation, ResourceList,
};
use resource_framework::tracing::try_setup_tracing;
use resource_sample::lifecycle::ResourceSystem;
use resource_sample::model::{Project, ProjectId, ProjectLinks, ProjectMeta};
use resource_sample::project_repository::{ProjectsLinksInformation, ProjectsMetaInformation};
use serde::{Deserialize, Serialize};

/// A meta shape the project repository never attaches.
#[derive(Debug, Serialize, Deserialize)]
struct TasksMetaInformation {
    open: u32,
}

impl Information for TasksMetaInformation {
    const KIND: &'static str = "tasks-meta";
}
impl MetaInformation for TasksMetaInformation {}

#[derive(Debug, Serialize, Deserialize)]
struct TasksLinksInformation {
    next: String,
}

impl Information for TasksLinksInformation {
    const KIND: &'static str = "tasks-links";
}
impl LinksInformation for TasksLinksInformation {}

/// Starts the system with project 14 already created.
async fn setup() -> ResourceSystem {
    try_setup_tracing();
    let system = ResourceSystem::new();
    system
        .project_client
        .create_project(Project::new(14, "Apollo"))
        .await
        .expect("Failed to create project");
    system
}

async fn find_all_projects(system: &ResourceSystem) -> ResourceList<Project> {
    system
        .project_client
        .find_all(QuerySpec::for_resource::<Project>())
        .await
        .expect("Failed to list projects")
}

#[tokio::test]
async fn test_meta() {
    let system = setup().await;

    let list = find_all_projects(&system).await;
    let meta_information: ProjectsMetaInformation = list.get_meta().unwrap();
    assert_eq!(meta_information.meta_value, "testMeta");

    let project = &list[0];
    let project_meta = project.meta().expect("project meta should be attached");
    assert_eq!(project_meta.value, "someMetaValue");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_links() {
    let system = setup().await;

    let list = find_all_projects(&system).await;
    let links_information: ProjectsLinksInformation = list.get_links().unwrap();
    assert_eq!(links_information.link_value, "testLink");

    let project = &list[0];
    let project_links = project.links().expect("project links should be attached");
    assert_eq!(project_links.value, "someLinkValue");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_collection_reads_are_idempotent() {
    let system = setup().await;
    let list = find_all_projects(&system).await;

    let first: ProjectsMetaInformation = list.get_meta().unwrap();
    let second: ProjectsMetaInformation = list.get_meta().unwrap();
    assert_eq!(first, second);

    let first: ProjectsLinksInformation = list.get_links().unwrap();
    let second: ProjectsLinksInformation = list.get_links().unwrap();
    assert_eq!(first, second);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_resource_reads_are_idempotent() {
    let system = setup().await;
    let list = find_all_projects(&system).await;
    let project = list.first().unwrap();

    let expected = ProjectMeta {
        value: "someMetaValue".to_string(),
    };
    assert_eq!(project.require_meta().unwrap(), &expected);
    assert_eq!(project.require_meta().unwrap(), &expected);
    assert_eq!(
        project.require_links().unwrap(),
        &ProjectLinks {
            value: "someLinkValue".to_string()
        }
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_other_collection_types_are_mismatches() {
    let system = setup().await;
    let list = find_all_projects(&system).await;

    let meta_err = list.get_meta::<TasksMetaInformation>().unwrap_err();
    assert!(meta_err.is_type_mismatch());

    let links_err = list.get_links::<TasksLinksInformation>().unwrap_err();
    assert!(links_err.is_type_mismatch());

    // A failed read leaves the attachment readable.
    assert_eq!(
        list.get_meta::<ProjectsMetaInformation>().unwrap().meta_value,
        "testMeta"
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_task_listing_has_nothing_attached() {
    let system = setup().await;

    let tasks = system.task_client.list_tasks().await.unwrap();
    assert!(tasks.is_empty());
    assert!(tasks.get_meta::<TasksMetaInformation>().unwrap_err().is_missing());
    assert!(tasks.get_links::<TasksLinksInformation>().unwrap_err().is_missing());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stored_project_is_not_decorated() {
    let system = setup().await;

    let saved = system
        .project_client
        .save_project(Project::new(14, "Apollo 2"))
        .await
        .unwrap();
    assert!(saved.meta().is_none());

    let project = system
        .project_client
        .find_one(ProjectId(14), QuerySpec::for_resource::<Project>())
        .await
        .unwrap();
    assert_eq!(project.name, "Apollo 2");
    assert_eq!(project.require_meta().unwrap().value, "someMetaValue");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_saving_a_read_copy_stores_no_attachments() {
    let system = setup().await;

    let mut listed = find_all_projects(&system).await.into_resources();
    let mut project = listed.remove(0);
    assert!(project.meta().is_some());
    project.name = "Apollo renamed".to_string();

    let saved = system.project_client.save_project(project).await.unwrap();
    assert_eq!(saved.name, "Apollo renamed");
    assert!(saved.meta().is_none());
    assert!(saved.links().is_none());

    system.shutdown().await.unwrap();
}
