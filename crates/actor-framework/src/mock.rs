//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of by an actor. Use it to test client wrappers
//! and orchestration code without spawning actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **State** | None (expectations) | Real state transitions |
//! | **Use Case** | Logic *around* the client | The actor itself or the full session |
//! | **Error Injection** | Easy (`return_err`) | Requires a specific state |
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)] struct Flag { on: bool }
//! #[derive(Debug)] enum FlagAction { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("flag error")] struct FlagError;
//!
//! #[async_trait]
//! impl ActorEntity for Flag {
//!     type Action = FlagAction; type ActionResult = bool; type Context = (); type Error = FlagError;
//!     async fn handle_action(&mut self, _: FlagAction, _: &()) -> Result<bool, FlagError> {
//!         self.on = !self.on;
//!         Ok(self.on)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Flag>::new();
//!     let client = mock.client();
//!
//!     mock.expect_action().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.perform_action(FlagAction::Toggle).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, then answer each
//! request by hand with [`expect_get`] / [`expect_action`]. This is the tool for
//! asserting on the exact action a wrapper sends.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// An expected request and the canned response for it.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation panics the background task, which drops the response channel and
/// surfaces as [`FrameworkError::ActorDropped`] in the caller.
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

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
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

    /// Expects a `get` (snapshot) request.
    pub fn expect_get(&mut self) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, state: T) {
        self.push(Ok(state));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Expectation::Get { response });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Expectation::Action { response });
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request with [`expect_get`] or
/// [`expect_action`], asserts on it, and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns its responder if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns the action and its responder if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Shelf {
        items: Vec<String>,
    }

    #[derive(Debug, PartialEq)]
    enum ShelfAction {
        Put(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Action = ShelfAction;
        type ActionResult = usize;
        type Context = ();
        type Error = ShelfError;

        async fn handle_action(
            &mut self,
            action: ShelfAction,
            _ctx: &Self::Context,
        ) -> Result<usize, Self::Error> {
            let ShelfAction::Put(item) = action;
            self.items.push(item);
            Ok(self.items.len())
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let put_task =
            tokio::spawn(async move { client.perform_action(ShelfAction::Put("jar".into())).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, ShelfAction::Put("jar".into()));
        responder.send(Ok(1)).unwrap();

        let result = put_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Shelf>::new();

        mock.expect_action().return_ok(1);
        mock.expect_get().return_ok(Shelf {
            items: vec!["jar".into()],
        });

        let client = mock.client();

        let len = client
            .perform_action(ShelfAction::Put("jar".into()))
            .await
            .unwrap();
        assert_eq!(len, 1);

        let shelf = client.get().await.unwrap();
        assert_eq!(shelf.items, vec!["jar".to_string()]);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_surfaces_as_dropped() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get().return_ok(Shelf::default());

        let result = mock
            .client()
            .perform_action(ShelfAction::Put("jar".into()))
            .await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
