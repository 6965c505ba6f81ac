//! # ResourceEntity Trait
//!
//! The `ResourceEntity` trait is the contract every resource (Project, Task, …) implements
//! to be managed by the generic [`ResourceRepository`](crate::ResourceRepository). It
//! fixes the identifier type, the statically typed resource-scoped meta and links, the
//! injected context and the error type, and provides lifecycle hooks with no-op defaults.
//!
//! # Provided Methods (Hooks)
//! - [`ResourceEntity::on_create`] - validation before the resource is stored
//! - [`ResourceEntity::on_save`] - validation before a stored resource is replaced
//! - [`ResourceEntity::on_delete`] - runs before the resource is removed
//! - [`ResourceEntity::on_read`] - decorates the *copy* handed back by a read
//! - [`ResourceEntity::list_meta`] / [`ResourceEntity::list_links`] - collection-scoped
//!   attachments for a query
//!
//! Which meta/links a repository attaches for a query is decided entirely by these
//! hooks. The framework only transports and type-checks the result.
//!
//! Resource-scoped meta and links belong to a read, not to the stored resource.
//! [`ResourceEntity::clear_information`] drops them from every value before it is
//! stored, so a decorated copy sent back through `save` does not leak its attachments.

use crate::information::InformationValue;
use crate::query::QuerySpec;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource must implement to be managed by a `ResourceRepository`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await other repositories. The `Context`
/// type is injected into every hook when the repository is started with `run()`.
#[async_trait]
pub trait ResourceEntity: Clone + Send + Sync + 'static {
    /// JSON:API resource type name (e.g. `"projects"`).
    const RESOURCE_TYPE: &'static str;

    /// The unique identifier for this resource.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Resource-scoped meta shape. Use `()` if the resource never carries meta.
    type Meta: Clone + Send + Sync + Debug;

    /// Resource-scoped links shape. Use `()` if the resource never carries links.
    type Links: Clone + Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the repository.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this resource.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this resource.
    fn id(&self) -> Self::Id;

    /// Resource-scoped meta, if any is attached.
    fn meta(&self) -> Option<&Self::Meta> {
        None
    }

    /// Resource-scoped links, if any are attached.
    fn links(&self) -> Option<&Self::Links> {
        None
    }

    /// Drops resource-scoped meta and links. Runs on every value before it is stored.
    /// Entities that carry attachments must override this.
    fn clear_information(&mut self) {}

    // --- Lifecycle Hooks (Async) ---

    /// Called before a new resource is inserted into the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before an existing resource is replaced by `save`.
    async fn on_save(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the resource is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on every copy returned by a read. The stored value is left untouched.
    async fn on_read(&mut self, _query: &QuerySpec, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Collection Information Hooks (Async) ---

    /// Collection-scoped meta for the result of `query`.
    async fn list_meta(
        _query: &QuerySpec,
        _resources: &[Self],
        _ctx: &Self::Context,
    ) -> Result<Option<InformationValue>, Self::Error> {
        Ok(None)
    }

    /// Collection-scoped links for the result of `query`.
    async fn list_links(
        _query: &QuerySpec,
        _resources: &[Self],
        _ctx: &Self::Context,
    ) -> Result<Option<InformationValue>, Self::Error> {
        Ok(None)
    }
}
