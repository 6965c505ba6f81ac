//! # Resource Sample Library
//!
//! A small application built on `resource-framework`: projects whose listings carry
//! meta and links on both scopes, and tasks that refer to projects. This library exposes
//! the modules for the demo binary and the integration tests.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod project_repository;
pub mod task_repository;
