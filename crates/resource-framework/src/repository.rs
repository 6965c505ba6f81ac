//! # Generic Resource Repository
//!
//! This module defines the `ResourceRepository`, the server half of the framework. It owns
//! the store for one resource type and processes requests sequentially in its own Tokio
//! task, so the store needs no locking.

use crate::client::RepositoryClient;
use crate::config::{ConfigError, RepositoryConfig};
use crate::entity::ResourceEntity;
use crate::error::RepositoryError;
use crate::list::ResourceList;
use crate::message::RepositoryRequest;
use crate::query::QuerySpec;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic repository that stores resources of one type.
///
/// ## Usage Pattern
///
/// 1. **Create**: `ResourceRepository::new()` returns the repository (server) and a
///    [`RepositoryClient`] (interface).
/// 2. **Wire & Run**: pass the entity's context into `repository.run(context)` and spawn it.
/// 3. **Use**: call the client; clone it freely.
///
/// ```rust
/// use resource_framework::{QuerySpec, ResourceEntity, ResourceRepository};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u64 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// #[async_trait]
/// impl ResourceEntity for Note {
///     const RESOURCE_TYPE: &'static str = "notes";
///     type Id = u64;
///     type Meta = ();
///     type Links = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> u64 { self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (repository, client) = ResourceRepository::<Note>::new(10);
///     tokio::spawn(repository.run(()));
///
///     client.create(Note { id: 7 }).await.unwrap();
///     let list = client.find_all(QuerySpec::for_resource::<Note>()).await.unwrap();
///     assert_eq!(list[0].id, 7);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: rejects a duplicate id, clears resource meta/links, runs `on_create`, then
///   inserts and records insertion order.
/// * **FindOne / FindAll**: clones the stored resources in insertion order, runs `on_read` on
///   each copy, then asks the entity for the collection meta and links of the query.
/// * **Save**: clears resource meta/links, runs `on_save`, then replaces the existing
///   resource in place.
/// * **Delete**: runs `on_delete`, then removes the resource.
pub struct ResourceRepository<T: ResourceEntity> {
    receiver: mpsc::Receiver<RepositoryRequest<T>>,
    store: Store<T>,
}

/// Resources by id, plus the order in which they were created.
struct Store<T: ResourceEntity> {
    resources: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: ResourceEntity> ResourceRepository<T> {
    /// Creates a new `ResourceRepository` and its associated `RepositoryClient`.
    ///
    /// `buffer_size` is the capacity of the request channel.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is zero. Use [`ResourceRepository::with_config`] to get a
    /// [`ConfigError`] instead.
    pub fn new(buffer_size: usize) -> (Self, RepositoryClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let repository = Self {
            receiver,
            store: Store {
                resources: HashMap::new(),
                order: Vec::new(),
            },
        };
        (repository, RepositoryClient::new(sender))
    }

    /// Like [`ResourceRepository::new`], sized from a validated configuration.
    pub fn with_config(config: &RepositoryConfig) -> Result<(Self, RepositoryClient<T>), ConfigError> {
        config.validate()?;
        Ok(Self::new(config.buffer_size))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let resource_type = T::RESOURCE_TYPE;
        info!(resource_type, "Repository started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RepositoryRequest::Create {
                    resource,
                    respond_to,
                } => {
                    let id = resource.id();
                    debug!(resource_type, %id, "Create");
                    let result = self.store.create(resource, &context).await;
                    match &result {
                        Ok(_) => info!(resource_type, %id, size = self.store.resources.len(), "Created"),
                        Err(e) => warn!(resource_type, %id, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RepositoryRequest::FindOne {
                    id,
                    query,
                    respond_to,
                } => {
                    let result = self.store.find_one(&id, &query, &context).await;
                    debug!(resource_type, %id, found = result.is_ok(), "FindOne");
                    let _ = respond_to.send(result);
                }
                RepositoryRequest::FindAll {
                    ids,
                    query,
                    respond_to,
                } => {
                    let result = self.store.find_all(ids.as_deref(), &query, &context).await;
                    match &result {
                        Ok(list) => debug!(
                            resource_type,
                            count = list.len(),
                            meta = list.has_meta(),
                            links = list.has_links(),
                            "FindAll"
                        ),
                        Err(e) => warn!(resource_type, error = %e, "FindAll failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RepositoryRequest::Save {
                    resource,
                    respond_to,
                } => {
                    let id = resource.id();
                    debug!(resource_type, %id, "Save");
                    let result = self.store.save(resource, &context).await;
                    match &result {
                        Ok(_) => info!(resource_type, %id, "Saved"),
                        Err(e) => warn!(resource_type, %id, error = %e, "Save failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RepositoryRequest::Delete { id, respond_to } => {
                    debug!(resource_type, %id, "Delete");
                    let result = self.store.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(resource_type, %id, size = self.store.resources.len(), "Deleted"),
                        Err(e) => warn!(resource_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(resource_type, size = self.store.resources.len(), "Shutdown");
    }
}

impl<T: ResourceEntity> Store<T> {
    async fn create(&mut self, mut resource: T, context: &T::Context) -> Result<T, RepositoryError> {
        let id = resource.id();
        if self.resources.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists(id.to_string()));
        }
        resource.clear_information();
        resource.on_create(context).await.map_err(entity_error)?;
        self.order.push(id.clone());
        self.resources.insert(id, resource.clone());
        Ok(resource)
    }

    async fn find_one(
        &self,
        id: &T::Id,
        query: &QuerySpec,
        context: &T::Context,
    ) -> Result<T, RepositoryError> {
        check_query::<T>(query)?;
        let mut resource = self
            .resources
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        resource.on_read(query, context).await.map_err(entity_error)?;
        Ok(resource)
    }

    async fn find_all(
        &self,
        ids: Option<&[T::Id]>,
        query: &QuerySpec,
        context: &T::Context,
    ) -> Result<ResourceList<T>, RepositoryError> {
        check_query::<T>(query)?;
        let mut resources: Vec<T> = self
            .order
            .iter()
            .filter(|id| ids.map_or(true, |wanted| wanted.contains(*id)))
            .filter_map(|id| self.resources.get(id).cloned())
            .collect();

        for resource in resources.iter_mut() {
            resource.on_read(query, context).await.map_err(entity_error)?;
        }

        let meta = T::list_meta(query, &resources, context)
            .await
            .map_err(entity_error)?;
        let links = T::list_links(query, &resources, context)
            .await
            .map_err(entity_error)?;

        Ok(ResourceList::new(resources).with_meta(meta).with_links(links))
    }

    async fn save(&mut self, mut resource: T, context: &T::Context) -> Result<T, RepositoryError> {
        let id = resource.id();
        if !self.resources.contains_key(&id) {
            return Err(RepositoryError::NotFound(id.to_string()));
        }
        resource.clear_information();
        resource.on_save(context).await.map_err(entity_error)?;
        self.resources.insert(id, resource.clone());
        Ok(resource)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), RepositoryError> {
        let resource = self
            .resources
            .get(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        resource.on_delete(context).await.map_err(entity_error)?;
        self.resources.remove(id);
        self.order.retain(|stored| stored != id);
        Ok(())
    }
}

fn check_query<T: ResourceEntity>(query: &QuerySpec) -> Result<(), RepositoryError> {
    if query.targets::<T>() {
        Ok(())
    } else {
        Err(RepositoryError::InvalidQuery(format!(
            "query for `{}` sent to `{}` repository",
            query.resource_type(),
            T::RESOURCE_TYPE
        )))
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> RepositoryError {
    RepositoryError::EntityError(Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Counter {
        id: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error")]
    struct CounterError;

    impl ResourceEntity for Counter {
        const RESOURCE_TYPE: &'static str = "counters";
        type Id = u32;
        type Meta = ();
        type Links = ();
        type Context = ();
        type Error = CounterError;

        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    #[should_panic]
    fn test_new_with_zero_buffer_panics() {
        let _ = ResourceRepository::<Counter>::new(0);
    }

    #[test]
    fn test_with_config_rejects_zero_buffer() {
        let result = ResourceRepository::<Counter>::with_config(&RepositoryConfig::with_buffer_size(0));
        assert!(matches!(result, Err(ConfigError::ZeroBufferSize)));
    }

    #[tokio::test]
    async fn test_save_keeps_insertion_order() {
        let (repository, client) = ResourceRepository::<Counter>::new(4);
        tokio::spawn(repository.run(()));
        for id in [3, 1, 2] {
            client.create(Counter { id }).await.unwrap();
        }
        client.save(Counter { id: 1 }).await.unwrap();

        let list = client.find_all(QuerySpec::for_resource::<Counter>()).await.unwrap();
        let ids: Vec<u32> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
