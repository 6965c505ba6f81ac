//! # Repository Messages
//!
//! This module defines the request type sent from a `RepositoryClient` to its
//! `ResourceRepository`, and the one-shot channel replies travel back on.

use crate::entity::ResourceEntity;
use crate::error::RepositoryError;
use crate::list::ResourceList;
use crate::query::QuerySpec;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by repositories.
pub type Response<T> = oneshot::Sender<Result<T, RepositoryError>>;

/// Internal message type sent to the repository to request operations.
///
/// The variants follow the repository interface of a JSON:API resource: create, the
/// two read forms (`FindOne` and `FindAll`, optionally restricted to ids), save and
/// delete. Every variant is generic over `T: ResourceEntity`, so a `Task` can never be
/// sent to the `Project` repository.
#[derive(Debug)]
pub enum RepositoryRequest<T: ResourceEntity> {
    Create {
        resource: T,
        respond_to: Response<T>,
    },
    FindOne {
        id: T::Id,
        query: QuerySpec,
        respond_to: Response<T>,
    },
    FindAll {
        ids: Option<Vec<T::Id>>,
        query: QuerySpec,
        respond_to: Response<ResourceList<T>>,
    },
    Save {
        resource: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
