//! # Generic Client
//!
//! This module defines the generic client for communicating with repositories.

use crate::entity::ResourceEntity;
use crate::error::RepositoryError;
use crate::list::ResourceList;
use crate::message::RepositoryRequest;
use crate::query::QuerySpec;
use tokio::sync::{mpsc, oneshot};

/// ## RepositoryClient
///
/// The `RepositoryClient<T>` is the caller-facing half of a `ResourceRepository<T>`. Each
/// method sends one request over a Tokio mpsc channel and awaits the reply on a oneshot
/// channel; a call either fully succeeds or fails as a whole.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Unreachable storage** – once the repository task is gone every call fails with
///   [`RepositoryError::RepositoryClosed`] or [`RepositoryError::RepositoryDropped`].
#[derive(Clone)]
pub struct RepositoryClient<T: ResourceEntity> {
    sender: mpsc::Sender<RepositoryRequest<T>>,
}

impl<T: ResourceEntity> RepositoryClient<T> {
    pub fn new(sender: mpsc::Sender<RepositoryRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, RepositoryError>>) -> RepositoryRequest<T>,
    ) -> Result<R, RepositoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RepositoryError::RepositoryClosed)?;
        response
            .await
            .map_err(|_| RepositoryError::RepositoryDropped)?
    }

    /// Stores `resource` under its own id and returns the stored value.
    pub async fn create(&self, resource: T) -> Result<T, RepositoryError> {
        self.request(|respond_to| RepositoryRequest::Create {
            resource,
            respond_to,
        })
        .await
    }

    pub async fn find_one(&self, id: T::Id, query: QuerySpec) -> Result<T, RepositoryError> {
        self.request(|respond_to| RepositoryRequest::FindOne {
            id,
            query,
            respond_to,
        })
        .await
    }

    /// All resources in creation order, with the collection meta/links for `query`.
    pub async fn find_all(&self, query: QuerySpec) -> Result<ResourceList<T>, RepositoryError> {
        self.request(|respond_to| RepositoryRequest::FindAll {
            ids: None,
            query,
            respond_to,
        })
        .await
    }

    /// Like [`RepositoryClient::find_all`], restricted to `ids`. Unknown ids are skipped.
    pub async fn find_all_by_ids(
        &self,
        ids: Vec<T::Id>,
        query: QuerySpec,
    ) -> Result<ResourceList<T>, RepositoryError> {
        self.request(|respond_to| RepositoryRequest::FindAll {
            ids: Some(ids),
            query,
            respond_to,
        })
        .await
    }

    pub async fn save(&self, resource: T) -> Result<T, RepositoryError> {
        self.request(|respond_to| RepositoryRequest::Save {
            resource,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), RepositoryError> {
        self.request(|respond_to| RepositoryRequest::Delete { id, respond_to })
            .await
    }
}
