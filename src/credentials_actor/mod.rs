//! # Credentials Actor
//!
//! Owns the session's single bearer token. Components read it through a
//! [`CredentialsClient`]; only the authenticated HTTP client replaces it (after a
//! refresh) and only logout or a failed refresh clears it.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CredentialsClient;
use crate::model::Credentials;
use actor_framework::ResourceActor;

/// Creates a Credentials actor holding `token` and its client.
pub fn new(token: Option<String>) -> (ResourceActor<Credentials>, CredentialsClient) {
    let (actor, generic_client) = ResourceActor::new(Credentials::new(token), 32);
    (actor, CredentialsClient::new(generic_client))
}
