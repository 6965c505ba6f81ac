//! # Project Client
//!
//! Provides a high-level API for the Project repository. It wraps a
//! `RepositoryClient<Project>` and reports failures as [`ProjectError`].
use crate::model::{Project, ProjectId};
use crate::project_repository::{ProjectError, ProjectsLinksInformation, ProjectsMetaInformation};
use async_trait::async_trait;
use resource_framework::{QuerySpec, RepositoryAccess, RepositoryClient, RepositoryError, ResourceList};
use tracing::{debug, instrument};

/// Client for interacting with the Project repository.
#[derive(Clone)]
pub struct ProjectClient {
    inner: RepositoryClient<Project>,
}

impl ProjectClient {
    pub fn new(inner: RepositoryClient<Project>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RepositoryAccess<Project> for ProjectClient {
    type Error = ProjectError;

    fn inner(&self) -> &RepositoryClient<Project> {
        &self.inner
    }

    fn map_error(e: RepositoryError) -> Self::Error {
        e.into()
    }
}

impl ProjectClient {
    #[instrument(skip(self, project), fields(project_id = %project.id))]
    pub async fn create_project(&self, project: Project) -> Result<Project, ProjectError> {
        debug!("Sending request");
        Ok(self.inner.create(project).await?)
    }

    #[instrument(skip(self, project), fields(project_id = %project.id))]
    pub async fn save_project(&self, project: Project) -> Result<Project, ProjectError> {
        debug!("Sending request");
        Ok(self.inner.save(project).await?)
    }

    /// Every project, unfiltered, with the listing meta and links attached.
    pub async fn list_projects(&self) -> Result<ResourceList<Project>, ProjectError> {
        self.find_all(QuerySpec::for_resource::<Project>()).await
    }

    #[instrument(skip(self))]
    pub async fn project_exists(&self, id: ProjectId) -> Result<bool, ProjectError> {
        match self
            .inner
            .find_one(id, QuerySpec::for_resource::<Project>())
            .await
        {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// The collection meta of an unfiltered project listing.
    #[instrument(skip(self))]
    pub async fn listing_meta(&self) -> Result<ProjectsMetaInformation, ProjectError> {
        Ok(self.list_projects().await?.get_meta()?)
    }

    /// The collection links of an unfiltered project listing.
    #[instrument(skip(self))]
    pub async fn listing_links(&self) -> Result<ProjectsLinksInformation, ProjectError> {
        Ok(self.list_projects().await?.get_links()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::{create_mock_client, expect_find_all, MockClient};
    use resource_framework::{InformationValue, ResourceEntity};

    fn listing(meta: Option<InformationValue>) -> ResourceList<Project> {
        ResourceList::new(vec![Project::new(14, "Apollo")]).with_meta(meta)
    }

    #[tokio::test]
    async fn test_listing_meta_reads_collection_meta() {
        let (client, mut receiver) = create_mock_client::<Project>(10);
        let project_client = ProjectClient::new(client);

        let task = tokio::spawn(async move { project_client.listing_meta().await });

        let (ids, query, responder) = expect_find_all(&mut receiver)
            .await
            .expect("Expected FindAll request");
        assert!(ids.is_none());
        assert_eq!(query.resource_type(), Project::RESOURCE_TYPE);

        let meta = ProjectsMetaInformation {
            meta_value: "fromMock".to_string(),
        };
        responder
            .send(Ok(listing(Some(InformationValue::meta(&meta).unwrap()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), meta);
    }

    #[tokio::test]
    async fn test_listing_meta_without_attachment_fails() {
        let mut mock = MockClient::<Project>::new();
        mock.expect_find_all().return_ok(listing(None));

        let project_client = ProjectClient::new(mock.client());
        let err = project_client.listing_meta().await.unwrap_err();
        assert!(matches!(err, ProjectError::InformationError(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_listing_links_with_meta_kind_attached_fails() {
        let mut mock = MockClient::<Project>::new();
        // Meta misfiled in the links slot is rejected on read.
        let wrong = InformationValue::meta(&ProjectsMetaInformation {
            meta_value: "testMeta".to_string(),
        })
        .unwrap();
        mock.expect_find_all()
            .return_ok(ResourceList::new(vec![]).with_links(Some(wrong)));

        let project_client = ProjectClient::new(mock.client());
        let err = project_client.listing_links().await.unwrap_err();
        assert!(
            matches!(err, ProjectError::InformationError(msg) if msg.contains("projects-meta") && msg.contains("not links"))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_project_exists_maps_not_found() {
        let mut mock = MockClient::<Project>::new();
        mock.expect_find_one(ProjectId(1))
            .return_ok(Project::new(1, "Apollo"));
        mock.expect_find_one(ProjectId(2))
            .return_err(RepositoryError::NotFound("2".to_string()));
        mock.expect_find_one(ProjectId(3))
            .return_err(RepositoryError::RepositoryClosed);

        let project_client = ProjectClient::new(mock.client());
        assert!(project_client.project_exists(ProjectId(1)).await.unwrap());
        assert!(!project_client.project_exists(ProjectId(2)).await.unwrap());
        assert!(matches!(
            project_client.project_exists(ProjectId(3)).await,
            Err(ProjectError::RepositoryError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_conflict_maps_to_already_exists() {
        let mut mock = MockClient::<Project>::new();
        mock.expect_create()
            .return_err(RepositoryError::AlreadyExists("14".to_string()));

        let project_client = ProjectClient::new(mock.client());
        let err = project_client
            .create_project(Project::new(14, "Apollo"))
            .await
            .unwrap_err();
        assert_eq!(err, ProjectError::AlreadyExists("14".to_string()));
    }
}
