//! # Credentials Client
//!
//! Read access to the bearer token for every component, plus the two writes the
//! session protocol needs.
use crate::credentials_actor::{CredentialsAction, CredentialsActionResult, CredentialsError};
use crate::model::Credentials;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::instrument;

#[derive(Clone)]
pub struct CredentialsClient {
    inner: ResourceClient<Credentials>,
}

impl CredentialsClient {
    pub fn new(inner: ResourceClient<Credentials>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Credentials> for CredentialsClient {
    type Error = CredentialsError;

    fn inner(&self) -> &ResourceClient<Credentials> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CredentialsError>()
            .unwrap_or_else(|e| CredentialsError::ActorCommunicationError(e.to_string()))
    }
}

impl CredentialsClient {
    pub async fn current(&self) -> Result<Option<String>, CredentialsError> {
        match self.perform(CredentialsAction::Current).await? {
            CredentialsActionResult::Current(token) => Ok(token),
            _ => unreachable!("Current action must return Current result"),
        }
    }

    #[instrument(skip_all)]
    pub async fn replace(&self, token: String) -> Result<(), CredentialsError> {
        match self.perform(CredentialsAction::Replace(token)).await? {
            CredentialsActionResult::Replace(()) => Ok(()),
            _ => unreachable!("Replace action must return Replace result"),
        }
    }

    /// Returns whether a token was present.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<bool, CredentialsError> {
        match self.perform(CredentialsAction::Clear).await? {
            CredentialsActionResult::Clear(had_token) => Ok(had_token),
            _ => unreachable!("Clear action must return Clear result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials_actor;

    #[tokio::test]
    async fn test_replace_then_clear() {
        let (actor, client) = credentials_actor::new(Some("old".to_string()));
        tokio::spawn(actor.run(()));

        assert_eq!(client.current().await.unwrap().as_deref(), Some("old"));
        client.replace("new".to_string()).await.unwrap();
        assert_eq!(client.current().await.unwrap().as_deref(), Some("new"));

        assert!(client.clear().await.unwrap());
        assert_eq!(client.current().await.unwrap(), None);
        assert!(!client.clear().await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_token_is_rejected() {
        let (actor, client) = credentials_actor::new(None);
        tokio::spawn(actor.run(()));

        let result = client.replace("  ".to_string()).await;

        assert_eq!(result, Err(CredentialsError::EmptyToken));
        assert_eq!(client.current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_debug_output_hides_token() {
        let (actor, client) = credentials_actor::new(Some("s3cret".to_string()));
        tokio::spawn(actor.run(()));

        let snapshot = client.snapshot().await.unwrap();

        assert!(snapshot.is_authenticated());
        assert!(!format!("{snapshot:?}").contains("s3cret"));
        assert!(!format!("{:?}", CredentialsAction::Replace("s3cret".into())).contains("s3cret"));
    }
}
