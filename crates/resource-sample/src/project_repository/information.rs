//! Collection-scoped meta and links attached to project listings.

use resource_framework::{Information, LinksInformation, MetaInformation};
use serde::{Deserialize, Serialize};

/// Meta attached to every project listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsMetaInformation {
    pub meta_value: String,
}

impl Information for ProjectsMetaInformation {
    const KIND: &'static str = "projects-meta";
}

impl MetaInformation for ProjectsMetaInformation {}

/// Links attached to every project listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsLinksInformation {
    pub link_value: String,
}

impl Information for ProjectsLinksInformation {
    const KIND: &'static str = "projects-links";
}

impl LinksInformation for ProjectsLinksInformation {}
