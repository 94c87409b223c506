//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of scripted expectations instead of a running actor.
//! It lets you test code that sits *around* the cache (resolvers, ledgers,
//! facades) deterministically, including failures that a real actor never
//! produces.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, scripted replies | Real store |
//! | **Determinism** | Full | Subject to scheduler |
//! | **Error Injection** | `return_err` | Needs a real failing hook |
//! | **Use Case** | Logic around the client | The cache itself or the full system |
//!
//! ## Scripted replies
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagUpdate;
//! #[derive(Debug)] enum TagAction {}
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! impl ActorEntity for Tag {
//!     type Id = u32; type Update = TagUpdate; type Action = TagAction;
//!     type ActionResult = (); type Error = TagError;
//!     fn id(&self) -> u32 { self.id }
//!     fn on_update(&mut self, _: TagUpdate) -> Result<(), TagError> { Ok(()) }
//!     fn handle_action(&mut self, a: TagAction) -> Result<(), TagError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Some(Tag { id: 1 }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.get(1).await.unwrap().is_some());
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Asserting on raw requests
//!
//! [`create_mock_client`] returns the client together with the request
//! receiver. Tests can then inspect each request, answer it by hand, or assert
//! that *no* request was sent at all (`receiver.try_recv().is_err()`), which is
//! how "the cache was left untouched" is checked.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for the next request of a given kind.
enum Expectation<T: ActorEntity> {
    Load(Result<usize, FrameworkError>),
    Upsert(Result<Option<T>, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Find(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<Option<T>, FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Load(_) => "Load",
            Expectation::Upsert(_) => "Upsert",
            Expectation::Get(..) => "Get",
            Expectation::Find(_) => "Find",
            Expectation::Update(..) => "Update",
            Expectation::Delete(..) => "Delete",
            Expectation::Action(..) => "Action",
        }
    }
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued. A request
/// whose kind or id does not match the head of the queue panics the mock task,
/// which surfaces to the caller as [`FrameworkError::ActorDropped`] and leaves
/// the mismatched expectation in place for [`MockClient::verify`] to report.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn answer<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut exps = expectations_clone.lock().unwrap();
                    exps.pop_front()
                };

                match (request, expectation) {
                    (ResourceRequest::Load { respond_to, .. }, Some(Expectation::Load(response))) => {
                        answer(respond_to, response)
                    }
                    (
                        ResourceRequest::Upsert { respond_to, .. },
                        Some(Expectation::Upsert(response)),
                    ) => answer(respond_to, response),
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get(expected, response)),
                    ) if id == expected => answer(respond_to, response),
                    (ResourceRequest::Find { respond_to, .. }, Some(Expectation::Find(response))) => {
                        answer(respond_to, response)
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(expected, response)),
                    ) if id == expected => answer(respond_to, response),
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete(expected, response)),
                    ) if id == expected => answer(respond_to, response),
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action(expected, response)),
                    ) if id == expected => answer(respond_to, response),
                    (request, expectation) => {
                        let expected = expectation.as_ref().map(Expectation::kind);
                        if let Some(expectation) = expectation {
                            expectations_clone.lock().unwrap().push_front(expectation);
                        }
                        panic!(
                            "Unexpected request {:?}, expected {:?}",
                            request,
                            expected.unwrap_or("nothing")
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_load(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(|response| Expectation::Load(response))
    }

    pub fn expect_upsert(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Upsert(response))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get(id, response))
    }

    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::Find(response))
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update(id, response))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Delete(id, response))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action(id, response))
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder returned by the `expect_*` methods; queue the reply with
/// [`return_ok`](ExpectationBuilder::return_ok) or
/// [`return_err`](ExpectationBuilder::return_err).
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW REQUEST HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests unless the test does, so this is the tool for
/// asserting exactly what was (or was not) sent.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Upsert request
pub async fn expect_upsert<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Upsert { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
