use crate::api::ApiError;
use crate::model::OrderScope;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    /// The fetch failed; the scope keeps its previous snapshot.
    #[error("Refreshing {scope} failed: {source}")]
    RefreshFailed {
        scope: OrderScope,
        #[source]
        source: ApiError,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl BoardError {
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            BoardError::RefreshFailed { source, .. } => Some(source),
            BoardError::ActorCommunicationError(_) => None,
        }
    }

    /// A failed fetch that the next poll may well get through.
    pub fn is_transient(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_transient)
    }
}
