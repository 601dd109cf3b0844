//! Typed clients over the generic [`ResourceClient`](actor_framework::ResourceClient),
//! one per actor.

pub mod board_client;
pub mod cart_client;
pub mod credentials_client;

pub use board_client::*;
pub use cart_client::*;
pub use credentials_client::*;
