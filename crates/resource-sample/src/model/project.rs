/// Represents a project.
///
/// # Repository
/// This struct implements the [`ResourceEntity`](resource_framework::ResourceEntity) trait,
/// allowing it to be managed by a [`ResourceRepository`](resource_framework::ResourceRepository).
/// Reads attach a [`ProjectMeta`] and [`ProjectLinks`] to every returned project; see
/// [`crate::project_repository`].
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ProjectMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
}

impl Project {
    /// Creates a project with no meta or links attached.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ProjectId(id),
            name: name.into(),
            meta: None,
            links: None,
        }
    }
}

/// Resource-scoped meta of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub value: String,
}

/// Resource-scoped links of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub value: String,
}
