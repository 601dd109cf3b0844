//! Bearer attachment and the single-retry refresh protocol.
//!
//! A 401 triggers exactly one refresh attempt. If it succeeds the request is retried
//! once with the new token; a second 401 is returned as is. If it fails the stored
//! token is dropped, [`SessionEvent::Terminated`] is broadcast and the caller gets the
//! original 401.

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::clients::CredentialsClient;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

/// Refresh endpoint, relative to the API base URL.
pub const DEFAULT_REFRESH_PATH: &str = "auth/token/refresh/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    RefreshFailed,
    LoggedOut,
}

/// Session-level notifications. Subscribers route the user back to login on
/// `Terminated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Terminated(TerminationReason),
}

#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Returns a fresh access token.
    async fn refresh(&self) -> Result<String, ApiError>;
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Exchanges a refresh token for an access token at the backend's refresh endpoint.
pub struct HttpTokenRefresher<T> {
    transport: Arc<T>,
    path: String,
    refresh_token: Option<String>,
}

impl<T: HttpTransport> HttpTokenRefresher<T> {
    pub fn new(transport: Arc<T>, path: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            transport,
            path: path.into(),
            refresh_token: refresh_token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[async_trait]
impl<T: HttpTransport> TokenRefresher for HttpTokenRefresher<T> {
    #[instrument(skip(self), fields(path = %self.path))]
    async fn refresh(&self) -> Result<String, ApiError> {
        let Some(refresh_token) = self.refresh_token.as_deref() else {
            return Err(ApiError::Unauthorized("no refresh token available".to_string()));
        };
        let request = ApiRequest::post(
            self.path.clone(),
            &serde_json::json!({ "refresh": refresh_token }),
        )?;
        let response = self.transport.execute(&request, None).await?.into_result()?;
        let RefreshResponse { access } = response.json()?;
        if access.trim().is_empty() {
            return Err(ApiError::Decode("refresh returned an empty access token".to_string()));
        }
        Ok(access)
    }
}

/// Authenticated client used by every API call.
pub struct AuthClient<T> {
    transport: Arc<T>,
    credentials: CredentialsClient,
    refresher: Arc<dyn TokenRefresher>,
    events: broadcast::Sender<SessionEvent>,
}

impl<T> Clone for AuthClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            credentials: self.credentials.clone(),
            refresher: Arc::clone(&self.refresher),
            events: self.events.clone(),
        }
    }
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(
        transport: Arc<T>,
        credentials: CredentialsClient,
        refresher: Arc<dyn TokenRefresher>,
        events: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            transport,
            credentials,
            refresher,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let bearer = self.credentials.current().await?;
        let response = self.transport.execute(&request, bearer.as_deref()).await?;
        if !response.is_unauthorized() {
            return response.into_result();
        }

        let original = ApiError::Unauthorized(response.body);
        debug!("Got 401, attempting token refresh");
        match self.refresher.refresh().await {
            Ok(token) => {
                self.credentials.replace(token.clone()).await?;
                info!("Token refreshed, retrying request");
                self.transport
                    .execute(&request, Some(&token))
                    .await?
                    .into_result()
            }
            Err(refresh_error) => {
                warn!(error = %refresh_error, "Token refresh failed, ending session");
                if let Err(e) = self.credentials.clear().await {
                    warn!(error = %e, "Failed to clear stored token");
                }
                // no subscribers is fine
                let _ = self
                    .events
                    .send(SessionEvent::Terminated(TerminationReason::RefreshFailed));
                Err(original)
            }
        }
    }

    pub async fn send_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.send(request).await?.json()
    }
}
