//! # Actor Messages
//!
//! The request envelope exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// An actor owns exactly one piece of state, so there are only two kinds of request:
///
/// - **Get**: a snapshot (clone) of the current state. Reads never mutate.
/// - **Action**: a resource-specific [`ActorEntity::Action`], applied to the state in
///   arrival order. All writes go through here.
///
/// The enum is generic over `T: ActorEntity`, which guarantees that a cart action can
/// never be delivered to a credentials actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
