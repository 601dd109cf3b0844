use std::fmt::Debug;

/// The session's bearer credential: at most one token string.
///
/// Replaced on refresh, cleared on logout. Debug output never shows the token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    bearer: Option<String>,
}

impl Credentials {
    pub fn new(bearer: Option<String>) -> Self {
        Self {
            bearer: bearer.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer.is_some()
    }

    pub(crate) fn replace(&mut self, token: String) {
        self.bearer = Some(token);
    }

    pub(crate) fn clear(&mut self) -> bool {
        self.bearer.take().is_some()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
