//! # Resource Lists
//!
//! A [`ResourceList`] is the result of a `find_all`: the matching resources in
//! repository order plus optional collection-scoped meta and links. It is built once
//! by the repository and is read-only afterwards; the typed accessors never touch
//! the stored attachments, so repeated reads return equal values.

use crate::error::{InformationChannel, InformationError, InformationScope};
use crate::information::{InformationValue, LinksInformation, MetaInformation};
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct ResourceList<T> {
    resources: Vec<T>,
    meta: Option<InformationValue>,
    links: Option<InformationValue>,
}

impl<T> ResourceList<T> {
    pub fn new(resources: Vec<T>) -> Self {
        Self {
            resources,
            meta: None,
            links: None,
        }
    }

    pub fn with_meta(mut self, meta: Option<InformationValue>) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_links(mut self, links: Option<InformationValue>) -> Self {
        self.links = links;
        self
    }

    /// Reads the collection meta as `M`.
    ///
    /// # Errors
    /// - [`InformationError::Missing`] if the repository attached no meta
    /// - [`InformationError::TypeMismatch`] if meta of another kind is attached
    /// - [`InformationError::Incompatible`] if the payload does not deserialize into `M`
    pub fn get_meta<M: MetaInformation>(&self) -> Result<M, InformationError> {
        Self::decode(self.meta.as_ref(), InformationChannel::Meta)
    }

    /// Reads the collection links as `L`. Fails like [`ResourceList::get_meta`].
    pub fn get_links<L: LinksInformation>(&self) -> Result<L, InformationError> {
        Self::decode(self.links.as_ref(), InformationChannel::Links)
    }

    fn decode<I: crate::information::Information>(
        value: Option<&InformationValue>,
        channel: InformationChannel,
    ) -> Result<I, InformationError> {
        value
            .ok_or(InformationError::Missing {
                scope: InformationScope::Collection,
                channel,
            })?
            .decode(channel)
    }

    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    pub fn has_links(&self) -> bool {
        self.links.is_some()
    }

    /// The raw tagged meta, if any.
    pub fn meta_value(&self) -> Option<&InformationValue> {
        self.meta.as_ref()
    }

    /// The raw tagged links, if any.
    pub fn links_value(&self) -> Option<&InformationValue> {
        self.links.as_ref()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.resources.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.resources.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.resources.iter()
    }

    pub fn resources(&self) -> &[T] {
        &self.resources
    }

    pub fn into_resources(self) -> Vec<T> {
        self.resources
    }
}

impl<T> Index<usize> for ResourceList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.resources[index]
    }
}

impl<T> IntoIterator for ResourceList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::information::Information;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct CountMeta {
        count: usize,
    }
    impl Information for CountMeta {
        const KIND: &'static str = "count-meta";
    }
    impl MetaInformation for CountMeta {}

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct VersionMeta {
        version: String,
    }
    impl Information for VersionMeta {
        const KIND: &'static str = "version-meta";
    }
    impl MetaInformation for VersionMeta {}

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SelfLinks {
        self_link: String,
    }
    impl Information for SelfLinks {
        const KIND: &'static str = "self-links";
    }
    impl LinksInformation for SelfLinks {}

    fn list_with_meta() -> ResourceList<&'static str> {
        let meta = InformationValue::meta(&CountMeta { count: 2 }).unwrap();
        ResourceList::new(vec!["a", "b"]).with_meta(Some(meta))
    }

    #[test]
    fn test_meta_round_trip_is_idempotent() {
        let list = list_with_meta();
        let first: CountMeta = list.get_meta().unwrap();
        let second: CountMeta = list.get_meta().unwrap();
        assert_eq!(first, CountMeta { count: 2 });
        assert_eq!(first, second);
        assert!(list.has_meta());
    }

    #[test]
    fn test_meta_with_other_type_fails() {
        let list = list_with_meta();
        let err = list.get_meta::<VersionMeta>().unwrap_err();
        assert!(err.is_type_mismatch());
        // The failed read leaves the attachment in place.
        assert_eq!(list.get_meta::<CountMeta>().unwrap().count, 2);
    }

    #[test]
    fn test_absent_links_are_missing() {
        let list = list_with_meta();
        let err = list.get_links::<SelfLinks>().unwrap_err();
        assert!(err.is_missing());
        assert!(!list.has_links());
    }

    #[test]
    fn test_links_round_trip() {
        let links = SelfLinks {
            self_link: "/projects".to_string(),
        };
        let list = ResourceList::<u8>::new(vec![])
            .with_links(Some(InformationValue::links(&links).unwrap()));
        assert_eq!(list.get_links::<SelfLinks>().unwrap(), links);
        assert!(list.get_meta::<CountMeta>().unwrap_err().is_missing());
    }

    #[test]
    fn test_sequence_access() {
        let list = list_with_meta();
        assert_eq!(list.len(), 2);
        assert_eq!(list.first(), Some(&"a"));
        assert_eq!(list[1], "b");
        assert_eq!(list.get(2), None);
        let collected: Vec<_> = list.into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }
}
