//! # ActorEntity Trait
//!
//! The contract a piece of state must satisfy to be owned by a [`ResourceActor`](crate::ResourceActor).

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any actor-owned state must implement.
///
/// # Architecture Note
/// The actor owns one value of the implementing type for its whole life. Every
/// mutation arrives as an [`Action`](ActorEntity::Action) and is applied by
/// [`handle_action`](ActorEntity::handle_action), one at a time, so the state has a
/// single writer without any locking.
///
/// # Async & Context
/// This trait is `#[async_trait]` so that handlers can await (e.g. an HTTP call whose
/// result replaces the state). The `Context` type is injected into every call to the
/// handler, which allows "Late Binding" of dependencies: they are passed to `run()`
/// instead of `new()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Enum of the operations this state supports (e.g. `AddItem`, `Refresh`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per actor rather than one per action. Clients match on a single
    /// type; the price is that the enum is the union of everything any action can
    /// report.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply one action to the state.
    ///
    /// Returning `Err` must leave the state as it was before the call.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
