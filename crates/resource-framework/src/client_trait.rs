//! # RepositoryAccess Trait
//!
//! Provides a common interface for resource-specific clients, adding default read and
//! delete methods built on top of a generic `RepositoryClient`.
use crate::{QuerySpec, RepositoryClient, RepositoryError, ResourceEntity, ResourceList};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard repository operations.
///
/// A domain client only supplies [`RepositoryAccess::inner`] and
/// [`RepositoryAccess::map_error`]; `find_one`, `find_all`, `find_all_by_ids` and
/// `delete` come for free and report failures in the domain's own error type.
///
/// # Example
///
/// ```rust
/// use resource_framework::{QuerySpec, RepositoryAccess, RepositoryClient, RepositoryError, ResourceEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u64 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct NoteError(String);
///
/// impl From<String> for NoteError {
///     fn from(s: String) -> Self { NoteError(s) }
/// }
///
/// #[async_trait]
/// impl ResourceEntity for Note {
///     const RESOURCE_TYPE: &'static str = "notes";
///     type Id = u64;
///     type Meta = ();
///     type Links = ();
///     type Context = ();
///     type Error = NoteError;
///     fn id(&self) -> u64 { self.id }
/// }
///
/// struct NoteClient {
///     inner: RepositoryClient<Note>,
/// }
///
/// #[async_trait]
/// impl RepositoryAccess<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &RepositoryClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: RepositoryError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// async fn usage(client: NoteClient) {
///     // find_all() and delete() are provided automatically!
///     let _ = client.find_all(QuerySpec::for_resource::<Note>()).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait RepositoryAccess<T: ResourceEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic RepositoryClient.
    fn inner(&self) -> &RepositoryClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: RepositoryError) -> Self::Error;

    /// Fetch a resource by id.
    #[tracing::instrument(skip(self, query))]
    async fn find_one(&self, id: T::Id, query: QuerySpec) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_one(id, query).await.map_err(Self::map_error)
    }

    /// Fetch every resource, with the collection meta and links for `query`.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self, query: QuerySpec) -> Result<ResourceList<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_all(query).await.map_err(Self::map_error)
    }

    /// Fetch the resources with the given ids.
    #[tracing::instrument(skip(self, query))]
    async fn find_all_by_ids(
        &self,
        ids: Vec<T::Id>,
        query: QuerySpec,
    ) -> Result<ResourceList<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .find_all_by_ids(ids, query)
            .await
            .map_err(Self::map_error)
    }

    /// Delete a resource by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
