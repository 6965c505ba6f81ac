//! ResourceEntity trait implementation for the Project domain type.
//!
//! Every read decorates the returned copies with the project meta and links, and every
//! listing carries the collection meta and links from [`super::information`].

use super::information::{ProjectsLinksInformation, ProjectsMetaInformation};
use super::ProjectError;
use crate::model::{Project, ProjectId, ProjectLinks, ProjectMeta};
use async_trait::async_trait;
use resource_framework::{InformationValue, QuerySpec, ResourceEntity};

#[async_trait]
impl ResourceEntity for Project {
    const RESOURCE_TYPE: &'static str = "projects";
    type Id = ProjectId;
    type Meta = ProjectMeta;
    type Links = ProjectLinks;
    type Context = ();
    type Error = ProjectError;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn meta(&self) -> Option<&ProjectMeta> {
        self.meta.as_ref()
    }

    fn links(&self) -> Option<&ProjectLinks> {
        self.links.as_ref()
    }

    fn clear_information(&mut self) {
        self.meta = None;
        self.links = None;
    }

    async fn on_read(&mut self, _query: &QuerySpec, _ctx: &Self::Context) -> Result<(), Self::Error> {
        self.meta = Some(ProjectMeta {
            value: "someMetaValue".to_string(),
        });
        self.links = Some(ProjectLinks {
            value: "someLinkValue".to_string(),
        });
        Ok(())
    }

    async fn list_meta(
        _query: &QuerySpec,
        _resources: &[Self],
        _ctx: &Self::Context,
    ) -> Result<Option<InformationValue>, Self::Error> {
        let meta = ProjectsMetaInformation {
            meta_value: "testMeta".to_string(),
        };
        Ok(Some(InformationValue::meta(&meta)?))
    }

    async fn list_links(
        _query: &QuerySpec,
        _resources: &[Self],
        _ctx: &Self::Context,
    ) -> Result<Option<InformationValue>, Self::Error> {
        let links = ProjectsLinksInformation {
            link_value: "testLink".to_string(),
        };
        Ok(Some(InformationValue::links(&links)?))
    }
}
