//! # Mock Repository & Testing Guide
//!
//! `MockClient<T>` hands out a real [`RepositoryClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running repository. It lets you test
//! client logic, including how callers react to a given meta/links attachment or to a
//! repository failure, without spawning a `ResourceRepository`.
//!
//! ## When to use Mocks vs Real Repositories
//!
//! | Feature | MockClient | Real Repository |
//! |---------|------------|-----------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real store and hooks |
//! | **Use Case** | Logic *around* the client | The entity hooks or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::mock::MockClient;
//! use resource_framework::{
//!     Information, InformationValue, MetaInformation, QuerySpec, ResourceEntity, ResourceList,
//! };
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug)] struct Note { id: u64 }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! #[async_trait]
//! impl ResourceEntity for Note {
//!     const RESOURCE_TYPE: &'static str = "notes";
//!     type Id = u64; type Meta = (); type Links = (); type Context = (); type Error = NoteError;
//!     fn id(&self) -> u64 { self.id }
//! }
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct NotesMeta { total: u32 }
//! impl Information for NotesMeta { const KIND: &'static str = "notes-meta"; }
//! impl MetaInformation for NotesMeta {}
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let meta = InformationValue::meta(&NotesMeta { total: 1 }).unwrap();
//!     mock.expect_find_all()
//!         .return_ok(ResourceList::new(vec![Note { id: 1 }]).with_meta(Some(meta)));
//!
//!     let list = mock.client().find_all(QuerySpec::for_resource::<Note>()).await.unwrap();
//!     assert_eq!(list.get_meta::<NotesMeta>().unwrap(), NotesMeta { total: 1 });
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use resource_framework::mock::MockClient;
//! use resource_framework::{RepositoryError, ResourceEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Note { id: u64 }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! #[async_trait]
//! impl ResourceEntity for Note {
//!     const RESOURCE_TYPE: &'static str = "notes";
//!     type Id = u64; type Meta = (); type Links = (); type Context = (); type Error = NoteError;
//!     fn id(&self) -> u64 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_create().return_err(RepositoryError::RepositoryClosed);
//!
//!     let result = mock.client().create(Note { id: 1 }).await;
//!     assert!(matches!(result, Err(RepositoryError::RepositoryClosed)));
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw request receiver, or the fluent
//! [`MockClient`] API.

use crate::client::RepositoryClient;
use crate::entity::ResourceEntity;
use crate::error::RepositoryError;
use crate::list::ResourceList;
use crate::message::RepositoryRequest;
use crate::query::QuerySpec;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<T: ResourceEntity> {
    Create {
        response: Result<T, RepositoryError>,
    },
    FindOne {
        id: T::Id,
        response: Result<T, RepositoryError>,
    },
    FindAll {
        response: Result<ResourceList<T>, RepositoryError>,
    },
    Save {
        response: Result<T, RepositoryError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), RepositoryError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered; an unexpected
/// request (or a `find_one`/`delete` for another id) panics the background task, which
/// surfaces in the test as [`RepositoryError::RepositoryDropped`].
pub struct MockClient<T: ResourceEntity> {
    client: RepositoryClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ResourceEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ResourceEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RepositoryRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        RepositoryRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RepositoryRequest::FindOne { id, respond_to, .. },
                        Some(Expectation::FindOne {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert!(id == expected, "find_one for unexpected id {id}");
                        let _ = respond_to.send(response);
                    }
                    (
                        RepositoryRequest::FindAll { respond_to, .. },
                        Some(Expectation::FindAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RepositoryRequest::Save { respond_to, .. },
                        Some(Expectation::Save { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RepositoryRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert!(id == expected, "delete for unexpected id {id}");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: RepositoryClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RepositoryClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_find_one(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::FindOne { id, response })
    }

    pub fn expect_find_all(&mut self) -> ExpectationBuilder<T, ResourceList<T>> {
        self.builder(|response| Expectation::FindAll { response })
    }

    pub fn expect_save(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Save { response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, RepositoryError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder finishing an expectation with its response.
pub struct ExpectationBuilder<T: ResourceEntity, R> {
    make: Box<dyn FnOnce(Result<R, RepositoryError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: ResourceEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RepositoryError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, RepositoryError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Lets a test play the repository by hand: receive the request, inspect it, and
/// answer on the enclosed one-shot sender.
pub fn create_mock_client<T: ResourceEntity>(
    buffer_size: usize,
) -> (RepositoryClient<T>, mpsc::Receiver<RepositoryRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RepositoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<RepositoryRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, RepositoryError>>)> {
    match receiver.recv().await {
        Some(RepositoryRequest::Create {
            resource,
            respond_to,
        }) => Some((resource, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindAll request
#[allow(clippy::type_complexity)]
pub async fn expect_find_all<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<RepositoryRequest<T>>,
) -> Option<(
    Option<Vec<T::Id>>,
    QuerySpec,
    oneshot::Sender<Result<ResourceList<T>, RepositoryError>>,
)> {
    match receiver.recv().await {
        Some(RepositoryRequest::FindAll {
            ids,
            query,
            respond_to,
        }) => Some((ids, query, respond_to)),
        _ => None,
    }
}
