//! # Framework Errors
//!
//! This module defines the error types shared by every repository and client.
//! Repository failures and side-channel accessor failures are kept apart so callers
//! can tell "the call failed" from "the call succeeded but the meta/links are not
//! what you asked for".

use std::fmt;

/// Errors that can occur within the repository framework itself.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Repository closed")]
    RepositoryClosed,
    #[error("Repository dropped response channel")]
    RepositoryDropped,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Which side channel an attachment travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InformationChannel {
    Meta,
    Links,
}

impl fmt::Display for InformationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InformationChannel::Meta => write!(f, "meta"),
            InformationChannel::Links => write!(f, "links"),
        }
    }
}

/// Whether an attachment belongs to a whole result list or to a single resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InformationScope {
    Collection,
    Resource,
}

impl fmt::Display for InformationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InformationScope::Collection => write!(f, "collection"),
            InformationScope::Resource => write!(f, "resource"),
        }
    }
}

/// Errors raised by the typed meta/links accessors.
///
/// `Missing` and `TypeMismatch` are deliberately separate variants: "nothing was
/// attached" and "something else was attached" call for different reactions.
#[derive(Debug, thiserror::Error)]
pub enum InformationError {
    #[error("No {channel} attached to {scope}")]
    Missing {
        scope: InformationScope,
        channel: InformationChannel,
    },
    #[error("`{kind}` was attached as {found}, not {expected}")]
    WrongChannel {
        kind: String,
        expected: InformationChannel,
        found: InformationChannel,
    },
    #[error("Requested {channel} of kind `{expected}` but `{found}` is attached")]
    TypeMismatch {
        channel: InformationChannel,
        expected: &'static str,
        found: String,
    },
    #[error("Attached `{kind}` payload does not fit the requested type: {source}")]
    Incompatible {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InformationError {
    pub fn is_missing(&self) -> bool {
        matches!(self, InformationError::Missing { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, InformationError::TypeMismatch { .. })
    }
}
