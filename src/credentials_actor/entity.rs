use super::actions::{CredentialsAction, CredentialsActionResult};
use super::error::CredentialsError;
use crate::model::Credentials;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Credentials {
    type Action = CredentialsAction;
    type ActionResult = CredentialsActionResult;
    type Context = ();
    type Error = CredentialsError;

    async fn handle_action(
        &mut self,
        action: CredentialsAction,
        _ctx: &Self::Context,
    ) -> Result<CredentialsActionResult, CredentialsError> {
        match action {
            CredentialsAction::Current => Ok(CredentialsActionResult::Current(
                self.bearer().map(str::to_string),
            )),
            CredentialsAction::Replace(token) => {
                if token.trim().is_empty() {
                    return Err(CredentialsError::EmptyToken);
                }
                self.replace(token);
                info!("Bearer token replaced");
                Ok(CredentialsActionResult::Replace(()))
            }
            CredentialsAction::Clear => {
                let had_token = self.clear();
                info!(had_token, "Bearer token cleared");
                Ok(CredentialsActionResult::Clear(had_token))
            }
        }
    }
}
