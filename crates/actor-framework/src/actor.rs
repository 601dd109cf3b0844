//! # Resource Actor
//!
//! The server half of the framework: a task that owns one piece of state.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single piece of state.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver
/// end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its messages *sequentially* in a loop. Two clients that send
/// actions at the same time are served one after the other, in arrival order, so the
/// state never needs a `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new(initial_state, buffer)` to get the `actor`
///     (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { value: u32 }
/// #[derive(Debug)] enum CounterAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, CounterError> {
///         self.value += 1;
///         Ok(self.value)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::new(Counter::default(), 10);
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.perform_action(CounterAction::Bump).await.unwrap(), 1);
///     assert_eq!(client.get().await.unwrap().value, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Get**: returns a clone of the current state.
/// * **Action**: calls [`ActorEntity::handle_action`] with the injected context and
///   returns its result. Entity errors are boxed into [`FrameworkError::EntityError`].
///
/// The loop ends when every client has been dropped.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    state: T,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` owning `state` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full, calls
    /// to the client wait until there is space.
    pub fn new(state: T, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every action. It may hold clients of other
    /// actors that were created *after* this actor but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // "Cart" instead of "krazz_client::cart::Cart"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { respond_to } => {
                    debug!(entity_type, "Get");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    handled += 1;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, handled, "Shutdown");
    }
}
