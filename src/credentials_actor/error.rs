use thiserror::Error;

/// Errors that can occur while reading or writing the stored credential.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CredentialsError {
    /// An empty string cannot stand in for a token.
    #[error("Refusing to store an empty token")]
    EmptyToken,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
