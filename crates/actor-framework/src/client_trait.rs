//! # ActorClient Trait
//!
//! Common interface for resource-specific clients, adding a default `snapshot` built
//! on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific client wrappers.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)] struct Tally { seen: u32 }
/// #[derive(Debug)] enum TallyAction { Seen }
/// #[derive(Debug, thiserror::Error)]
/// enum TallyError {
///     #[error("actor communication error: {0}")]
///     ActorCommunicationError(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Tally {
///     type Action = TallyAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TallyError;
///     async fn handle_action(&mut self, _: TallyAction, _: &()) -> Result<(), TallyError> {
///         self.seen += 1;
///         Ok(())
///     }
/// }
///
/// struct TallyClient { inner: ResourceClient<Tally> }
///
/// #[async_trait]
/// impl ActorClient<Tally> for TallyClient {
///     type Error = TallyError;
///     fn inner(&self) -> &ResourceClient<Tally> { &self.inner }
///     fn map_error(e: FrameworkError) -> TallyError {
///         TallyError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TallyClient) {
///     // snapshot() is provided automatically
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }

    /// Send one action and map any failure into the resource error type.
    async fn perform(&self, action: T::Action) -> Result<T::ActionResult, Self::Error> {
        self.inner()
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }
}
