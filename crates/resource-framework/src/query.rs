//! Query specification passed to repository reads.
//!
//! The repository does not evaluate queries: it only checks that the query targets its
//! resource type and hands the query to the entity hooks, which may inspect the
//! free-form parameters to decide what to attach.

use crate::entity::ResourceEntity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    resource_type: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    params: BTreeMap<String, String>,
}

impl QuerySpec {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            params: BTreeMap::new(),
        }
    }

    /// Unfiltered query for the resource type of `T`.
    pub fn for_resource<T: ResourceEntity>() -> Self {
        Self::new(T::RESOURCE_TYPE)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// True if this query targets the resource type of `T`.
    pub fn targets<T: ResourceEntity>(&self) -> bool {
        self.resource_type == T::RESOURCE_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_are_kept() {
        let query = QuerySpec::new("projects").with_param("include", "tasks");
        assert_eq!(query.resource_type(), "projects");
        assert_eq!(query.param("include"), Some("tasks"));
        assert_eq!(query.param("sort"), None);
    }

    #[test]
    fn test_serde_skips_empty_params() {
        let json = serde_json::to_value(QuerySpec::new("tasks")).unwrap();
        assert_eq!(json, serde_json::json!({ "resource_type": "tasks" }));

        let back: QuerySpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, QuerySpec::new("tasks"));
    }
}
