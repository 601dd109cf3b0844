use crate::credentials_actor::CredentialsError;
use thiserror::Error;

/// Failures of a call to the backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    /// 401 that survived the refresh protocol.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The server refused the request. `message` is the response body, unmodified.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("credential store unavailable: {0}")]
    Credentials(String),
}

impl ApiError {
    /// Timeouts and connection failures. The caller may retry by hand; the poller
    /// retries on its next tick.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<CredentialsError> for ApiError {
    fn from(e: CredentialsError) -> Self {
        ApiError::Credentials(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(ApiError::Timeout.is_transient());
        assert!(ApiError::Network("connection reset".to_string()).is_transient());
        assert!(!ApiError::Unauthorized("expired".to_string()).is_transient());
        assert!(!ApiError::Decode("missing field".to_string()).is_transient());
    }
}
