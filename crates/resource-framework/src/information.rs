//! # Meta & Links Information
//!
//! JSON:API lets a server attach out-of-band data next to the primary data: `meta`
//! (descriptive) and `links` (navigational). This module defines how those
//! attachments are represented and read back with their concrete type.
//!
//! ## Collection scope
//!
//! A [`ResourceList`](crate::ResourceList) does not know statically which meta/links
//! type the repository attached for a given query. The attachment is therefore stored
//! as a tagged variant, [`InformationValue`], holding the attached type's
//! [`Information::KIND`] and its JSON form. Reading it back is a *checked* conversion:
//!
//! 1. Nothing attached → [`InformationError::Missing`].
//! 2. A value built for the other channel → [`InformationError::WrongChannel`].
//! 3. A different kind attached → [`InformationError::TypeMismatch`].
//! 4. Same kind but the payload does not deserialize → [`InformationError::Incompatible`].
//!
//! The channel markers [`MetaInformation`] and [`LinksInformation`] keep a links
//! type from being requested on the meta channel at compile time. Values are built
//! with [`InformationValue::meta`] or [`InformationValue::links`], which record the
//! channel, so a value built as links is never read back as meta.
//!
//! ## Resource scope
//!
//! A resource declares its meta/links shapes as associated types of
//! [`ResourceEntity`], so no tag is needed. [`ResourceInformation`] adds the
//! `require_*` accessors that turn absence into an error.

use crate::entity::ResourceEntity;
use crate::error::{InformationChannel, InformationError, InformationScope};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A type that can be attached as collection-scoped meta or links.
pub trait Information: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Stable name of this shape. Two types must never share a kind.
    const KIND: &'static str;
}

/// Marker for types attached on the `meta` channel.
pub trait MetaInformation: Information {}

/// Marker for types attached on the `links` channel.
pub trait LinksInformation: Information {}

/// An attached payload tagged with its channel and the kind of the type that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InformationValue {
    channel: InformationChannel,
    kind: String,
    payload: Value,
}

impl InformationValue {
    /// Captures `value` for the meta channel.
    pub fn meta<M: MetaInformation>(value: &M) -> Result<Self, InformationError> {
        Self::tagged(InformationChannel::Meta, value)
    }

    /// Captures `value` for the links channel.
    pub fn links<L: LinksInformation>(value: &L) -> Result<Self, InformationError> {
        Self::tagged(InformationChannel::Links, value)
    }

    fn tagged<I: Information>(channel: InformationChannel, value: &I) -> Result<Self, InformationError> {
        let payload = serde_json::to_value(value).map_err(|source| InformationError::Incompatible {
            kind: I::KIND.to_string(),
            source,
        })?;
        Ok(Self {
            channel,
            kind: I::KIND.to_string(),
            payload,
        })
    }

    pub fn channel(&self) -> InformationChannel {
        self.channel
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Checked conversion back into `I`.
    pub(crate) fn decode<I: Information>(
        &self,
        channel: InformationChannel,
    ) -> Result<I, InformationError> {
        if self.channel != channel {
            return Err(InformationError::WrongChannel {
                kind: self.kind.clone(),
                expected: channel,
                found: self.channel,
            });
        }
        if self.kind != I::KIND {
            return Err(InformationError::TypeMismatch {
                channel,
                expected: I::KIND,
                found: self.kind.clone(),
            });
        }
        I::deserialize(&self.payload).map_err(|source| InformationError::Incompatible {
            kind: self.kind.clone(),
            source,
        })
    }
}

/// Required-access helpers for resource-scoped meta and links.
pub trait ResourceInformation: ResourceEntity {
    /// The resource meta, or [`InformationError::Missing`] if none is attached.
    fn require_meta(&self) -> Result<&Self::Meta, InformationError> {
        self.meta().ok_or(InformationError::Missing {
            scope: InformationScope::Resource,
            channel: InformationChannel::Meta,
        })
    }

    /// The resource links, or [`InformationError::Missing`] if none are attached.
    fn require_links(&self) -> Result<&Self::Links, InformationError> {
        self.links().ok_or(InformationError::Missing {
            scope: InformationScope::Resource,
            channel: InformationChannel::Links,
        })
    }
}

impl<T: ResourceEntity> ResourceInformation for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct PageMeta {
        total: u32,
    }

    impl Information for PageMeta {
        const KIND: &'static str = "page-meta";
    }
    impl MetaInformation for PageMeta {}

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct AuthorMeta {
        author: String,
    }

    impl Information for AuthorMeta {
        const KIND: &'static str = "author-meta";
    }
    impl MetaInformation for AuthorMeta {}

    /// Valid on both channels, so only the recorded channel tells them apart.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Pagination {
        next: Option<u32>,
    }

    impl Information for Pagination {
        const KIND: &'static str = "pagination";
    }
    impl MetaInformation for Pagination {}
    impl LinksInformation for Pagination {}

    #[test]
    fn test_decode_same_kind() {
        let value = InformationValue::meta(&PageMeta { total: 3 }).unwrap();
        assert_eq!(value.kind(), "page-meta");
        let decoded: PageMeta = value.decode(InformationChannel::Meta).unwrap();
        assert_eq!(decoded, PageMeta { total: 3 });
    }

    #[test]
    fn test_decode_other_kind_is_mismatch() {
        let value = InformationValue::meta(&PageMeta { total: 3 }).unwrap();
        let err = value
            .decode::<AuthorMeta>(InformationChannel::Meta)
            .unwrap_err();
        match err {
            InformationError::TypeMismatch {
                channel,
                expected,
                found,
            } => {
                assert_eq!(channel, InformationChannel::Meta);
                assert_eq!(expected, "author-meta");
                assert_eq!(found, "page-meta");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_corrupted_payload_is_incompatible() {
        let value = InformationValue {
            channel: InformationChannel::Meta,
            kind: "page-meta".to_string(),
            payload: serde_json::json!({ "total": "three" }),
        };
        let err = value
            .decode::<PageMeta>(InformationChannel::Meta)
            .unwrap_err();
        assert!(matches!(err, InformationError::Incompatible { .. }));
        assert!(!err.is_type_mismatch());
    }

    #[test]
    fn test_decode_on_other_channel_is_wrong_channel() {
        let value = InformationValue::meta(&Pagination { next: Some(2) }).unwrap();
        assert_eq!(value.channel(), InformationChannel::Meta);

        let err = value
            .decode::<Pagination>(InformationChannel::Links)
            .unwrap_err();
        assert!(matches!(
            err,
            InformationError::WrongChannel {
                expected: InformationChannel::Links,
                found: InformationChannel::Meta,
                ..
            }
        ));
        assert_eq!(
            value.decode::<Pagination>(InformationChannel::Meta).unwrap(),
            Pagination { next: Some(2) }
        );
    }
}
