//! # Board Actor
//!
//! Owns the session's [`OrderBoard`]: the latest order snapshot per scope and the set
//! of orders already announced as ready. The backend fetch happens in the
//! [`BoardClient`]; the actor only applies finished fetches, so reads never wait on
//! the network.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::api::OrderApi;
use crate::clients::BoardClient;
use crate::model::OrderBoard;
use actor_framework::ResourceActor;
use std::sync::Arc;

/// Creates an empty board actor and a client that refreshes through `api`.
pub fn new(api: Arc<dyn OrderApi>) -> (ResourceActor<OrderBoard>, BoardClient) {
    let (actor, generic_client) = ResourceActor::new(OrderBoard::new(), 16);
    (actor, BoardClient::new(generic_client, api))
}
