//! # Resource Framework
//!
//! Building blocks for JSON:API-style resource repositories whose results carry typed
//! out-of-band **meta** and **links** next to the primary data.
//!
//! ## Architecture Overview
//!
//! The framework follows the actor pattern and separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`ResourceEntity`]) - your resource type, its id, its
//!    resource-scoped meta/links shapes and the hooks deciding what a read attaches
//! 2. **Runtime Layer** ([`ResourceRepository`]) - owns the store, processes requests
//!    sequentially in its own Tokio task
//! 3. **Interface Layer** ([`RepositoryClient`], [`RepositoryAccess`]) - type-safe
//!    request/response calls
//! 4. **Accessor Layer** ([`ResourceList`], [`ResourceInformation`]) - checked, typed views
//!    of the attached meta and links
//!
//! ## Meta & Links
//!
//! A `find_all` returns a [`ResourceList`]. Each resource may carry its own meta/links,
//! declared statically as [`ResourceEntity::Meta`] and [`ResourceEntity::Links`]. The list
//! itself may carry collection meta/links whose type is only known to the caller:
//!
//! ```rust,ignore
//! let list = projects.find_all(QuerySpec::for_resource::<Project>()).await?;
//! let meta: ProjectsMetaInformation = list.get_meta()?;   // collection scope, checked
//! let project_meta = list[0].require_meta()?;             // resource scope, static type
//! ```
//!
//! Absence and type mismatch are distinct [`InformationError`] variants; neither yields a
//! default value. See the [`information`] module.
//!
//! ## Concurrency Model
//!
//! - Each repository runs in its own Tokio task
//! - Requests are processed **sequentially** within a repository (no locks needed)
//! - Dropping every client shuts the repository down
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `RepositoryClient` from queued expectations, so
//! client logic can be tested without spawning repositories.

pub mod client;
pub mod client_trait;
pub mod config;
pub mod entity;
pub mod error;
pub mod information;
pub mod list;
pub mod message;
pub mod mock;
pub mod query;
pub mod repository;
pub mod tracing;

// Re-export core types for convenience
pub use client::RepositoryClient;
pub use client_trait::RepositoryAccess;
pub use config::{ConfigError, RepositoryConfig};
pub use entity::ResourceEntity;
pub use error::{InformationChannel, InformationError, InformationScope, RepositoryError};
pub use information::{
    Information, InformationValue, LinksInformation, MetaInformation, ResourceInformation,
};
pub use list::ResourceList;
pub use message::{RepositoryRequest, Response};
pub use query::QuerySpec;
pub use repository::ResourceRepository;
