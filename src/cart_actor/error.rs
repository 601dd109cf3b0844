use crate::model::CartKey;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Quantity policy violations are not errors; they come back as clamps and shortfalls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// No line with this key is in the cart.
    #[error("Cart line not found: {0}")]
    LineNotFound(CartKey),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
