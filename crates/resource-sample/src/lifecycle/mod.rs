//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the sample repositories.
//!
//! ## The ResourceSystem Pattern
//!
//! 1. **Creation** - build every repository and its client (no dependencies yet)
//! 2. **Dependency Injection** - start each repository with its context; the Task
//!    repository receives a `ProjectClient` to validate project references
//! 3. **Graceful Shutdown** - drop the clients, then await every repository task
//!
//! The Task repository holds a clone of the project client, so the Project repository
//! only stops after the Task repository has stopped. The dependency graph is acyclic,
//! so channel closure alone is enough to shut everything down.
//!
//! ## Configuration
//!
//! [`SystemConfig`] holds one [`RepositoryConfig`](resource_framework::RepositoryConfig)
//! per repository and can be read from JSON. Log levels come from `RUST_LOG`, see
//! [`resource_framework::tracing`].

pub mod config;
pub mod resource_system;

pub use config::*;
pub use resource_system::*;
